extern crate polyreg;
extern crate serde_json;
extern crate tempdir;
#[macro_use] extern crate polyreg_assert_close;
#[macro_use] extern crate pretty_assertions;

use ::polyreg::{invert, multiply, regress, Coefficients, Degree, FitError, InvertError, Matrix, Point};
use ::polyreg::tasks::{read_points, run_fit, FitArgs, FitSession, Settings};
use ::std::path::PathBuf;
use ::std::process::Command;
use ::tempdir::TempDir;

fn resource(name: &str) -> PathBuf
{ PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/resources").join(name) }

fn points(xys: &[(f64, f64)]) -> Vec<Point>
{ xys.iter().cloned().map(Point::from).collect() }

fn degree(d: i64) -> Degree
{ Degree::new(d).unwrap() }

#[test]
fn inverse_round_trip() {
    let a = Matrix::from_rows(&[
        [4.0, -2.0, 1.0],
        [3.0, 6.0, -4.0],
        [2.0, 1.0, 8.0],
    ]).unwrap();
    let product = multiply(&a, &invert(&a).unwrap()).unwrap();
    assert_close!(abs=1e-6, product, Matrix::identity(3));
}

#[test]
fn zero_row_is_singular() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [0.0, 0.0]]).unwrap();
    assert_eq!(invert(&a), Err(InvertError::SingularMatrix { column: 1 }));
}

#[test]
fn exact_and_linear_fits() {
    let quad = regress(&points(&[(0.0, 1.0), (1.0, 2.0), (2.0, 5.0)]), degree(2)).unwrap();
    assert_close!(abs=1e-6, quad.as_slice(), &[1.0, 0.0, 1.0][..]);

    let line = regress(&points(&[(0.0, 0.0), (1.0, 2.0), (2.0, 4.0)]), degree(1)).unwrap();
    assert_close!(abs=1e-6, line.as_slice(), &[0.0, 2.0][..]);
    assert_close!(abs=1e-6, line.evaluate(5.0), 10.0);
}

#[test]
fn precondition_failures() {
    match regress(&points(&[(0.0, 1.0), (1.0, 2.0)]), degree(2)) {
        Err(FitError::InsufficientPoints { points: 2, needed: 3, degree: 2 }) => {},
        r => panic!("unexpected: {:?}", r),
    }
    match regress(&points(&[(1.0, 1.0), (1.0, 5.0)]), degree(1)) {
        Err(FitError::RegressionFailed(InvertError::SingularMatrix { .. })) => {},
        r => panic!("unexpected: {:?}", r),
    }
}

#[test]
fn formula_keeps_zero_terms() {
    let coeffs = Coefficients::new(vec![1.0, 0.0, 2.0]).unwrap();
    assert_eq!(coeffs.to_string(), "1 + 0*x^1 + 2*x^2");
}

#[test]
fn regression_is_deterministic() {
    let pts = points(&[(0.1, 0.3), (0.7, -1.2), (1.9, 2.2), (2.4, 0.5), (3.3, 4.1)]);
    let a = regress(&pts, degree(3)).unwrap();
    let b = regress(&pts, degree(3)).unwrap();
    let bits = |c: &Coefficients| c.as_slice().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn least_squares_line_through_yaml_points() {
    let pts = read_points(resource("noisy-line.yaml")).unwrap();
    assert_eq!(pts.len(), 5);

    let line = regress(&pts, degree(1)).unwrap();
    assert_close!(abs=1e-9, line.as_slice(), &[0.04, 1.99][..]);
}

#[test]
fn session_over_a_points_file() {
    let mut session = FitSession::new(&Settings::default()).unwrap();
    session.extend_points(read_points(resource("quadratic.txt")).unwrap());

    let fit = session.run_regression().unwrap().clone();
    assert_close!(abs=1e-6, fit.coefficients.as_slice(), &[1.0, 0.0, 1.0][..]);
    assert_close!(abs=1e-9, fit.mse, 0.0);

    let curve = session.sample_curve(6).unwrap();
    let xs: Vec<f64> = curve.iter().map(|p| p.x).collect();
    assert_close!(abs=1e-12, xs, vec![-2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn config_file_drives_the_fit() {
    let dir = TempDir::new("polyreg-test").unwrap();
    let curve_path = dir.path().join("curve.json");

    let args = FitArgs {
        config: Some(resource("cubic.yaml")),
        save_curve: Some(curve_path.clone()),
        ..FitArgs::new(resource("quadratic.txt"))
    };
    let report = run_fit(&args).unwrap();
    assert_eq!(report.degree, 3);
    assert_close!(abs=1e-6, report.coefficients, vec![1.0, 0.0, 1.0, 0.0]);
    assert_eq!(report.curve.len(), 11);

    let json: ::serde_json::Value = ::serde_json::from_str(
        &::std::fs::read_to_string(&curve_path).unwrap(),
    ).unwrap();
    assert_eq!(json["curve"].as_array().unwrap().len(), 11);
    assert_eq!(json["coefficients"].as_array().unwrap().len(), 4);
}

#[test]
fn binary_saves_the_formula() {
    let dir = TempDir::new("polyreg-test").unwrap();
    let formula_path = dir.path().join("formula.txt");

    let status = Command::new(env!("CARGO_BIN_EXE_polyreg"))
        .arg(resource("quadratic.txt"))
        .arg("--degree").arg("2")
        .arg("--save-formula").arg(&formula_path)
        .status()
        .unwrap();
    assert!(status.success());

    let text = ::std::fs::read_to_string(&formula_path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Polynomial regression formula:"));
    assert!(lines.next().unwrap().starts_with("y = "));
    assert_eq!(lines.next(), None);
}

#[test]
fn binary_fails_on_bad_degree() {
    let output = Command::new(env!("CARGO_BIN_EXE_polyreg"))
        .arg(resource("quadratic.txt"))
        .arg("--degree").arg("11")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    // once the logger is up, errors go wherever the log goes
    let all_output = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
    assert!(all_output.contains("degree must be between 1 and 10 (got 11)"), "{}", all_output);
}
