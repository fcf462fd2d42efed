/* ********************************************************************** **
**  This file is part of polyreg.                                         **
**                                                                        **
**  polyreg is free software: you can redistribute it and/or modify it    **
**  under the terms of the GNU General Public License as published by the **
**  Free Software Foundation, either version 3 of the License, or (at     **
**  your option) any later version.                                       **
**                                                                        **
**      http://www.gnu.org/licenses/                                      **
**                                                                        **
** Do note that, while the whole of polyreg is licensed under the GPL,    **
** many parts of it are licensed under more permissive terms.             **
** ********************************************************************** */

use crate::FailResult;
use crate::config::Settings;
use crate::points::read_points;
use crate::session::FitSession;
use crate::ui::cli_deserialize::CliDeserialize;

use ::clap::{App, Arg, ArgMatches};
use ::polyreg_fit::{Coefficients, Point};
use ::std::path::{Path, PathBuf};

/// Arguments of the `polyreg` binary (minus logging).
#[derive(Debug, Clone, PartialEq)]
pub struct FitArgs {
    pub points: PathBuf,
    pub config: Option<PathBuf>,
    pub degree: Option<i64>,
    pub samples: Option<usize>,
    pub save_formula: Option<PathBuf>,
    pub save_curve: Option<PathBuf>,
}

impl FitArgs {
    pub fn new<P: AsRef<Path>>(points: P) -> Self
    {
        FitArgs {
            points: points.as_ref().to_owned(),
            config: None,
            degree: None,
            samples: None,
            save_formula: None,
            save_curve: None,
        }
    }

    /// The config file (or defaults) with command-line overrides applied.
    pub fn settings(&self) -> FailResult<Settings>
    {
        let mut settings = match self.config.as_ref() {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(degree) = self.degree {
            if degree < 1 || degree > i64::from(settings.max_degree) {
                bail!("degree must be between 1 and {} (got {})", settings.max_degree, degree);
            }
            settings.degree = degree as u32;
        }
        if let Some(samples) = self.samples {
            settings.curve_samples = samples;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl CliDeserialize for FitArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("points")
                .required(true)
                .value_name("POINTS")
                .help("sample points; 'x y' per line, or a YAML list of {x, y}"),
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("CONFIG")
                .help("settings yaml"),
            Arg::with_name("degree")
                .short("d")
                .long("degree")
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("DEGREE")
                .help("degree of the polynomial (overrides the config)"),
            Arg::with_name("samples")
                .long("samples")
                .takes_value(true)
                .value_name("N")
                .help("number of points in the curve written by --save-curve"),
            Arg::with_name("save_formula")
                .long("save-formula")
                .takes_value(true)
                .value_name("FILE")
                .help("write the formula to this text file"),
            Arg::with_name("save_curve")
                .long("save-curve")
                .takes_value(true)
                .value_name("FILE")
                .help("write coefficients and a sampled curve to this JSON file"),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self> {
        let path = |name: &str| m.value_of(name).map(PathBuf::from);
        Ok(FitArgs {
            points: match path("points") {
                Some(points) => points,
                None => bail!("missing POINTS argument"),
            },
            config: path("config"),
            degree: match m.value_of("degree") {
                Some(s) => Some(s.parse().map_err(|_| {
                    format_err!("--degree: expected an integer, got '{}'", s)
                })?),
                None => None,
            },
            samples: match m.value_of("samples") {
                Some(s) => Some(s.parse().map_err(|_| {
                    format_err!("--samples: expected a count, got '{}'", s)
                })?),
                None => None,
            },
            save_formula: path("save_formula"),
            save_curve: path("save_curve"),
        })
    }
}

/// What `--save-curve` writes.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    pub degree: u32,
    /// Ascending powers of x.
    pub coefficients: Vec<f64>,
    pub formula: String,
    pub mse: f64,
    pub curve: Vec<Point>,
}

pub fn write_formula<P: AsRef<Path>>(path: P, coeffs: &Coefficients) -> FailResult<()>
{
    let path = path.as_ref();
    crate::fsx::write(path, format!("Polynomial regression formula:\ny = {}\n", coeffs))?;
    info!("Formula saved to {}", path.display());
    Ok(())
}

pub fn write_curve<P: AsRef<Path>>(path: P, report: &FitReport) -> FailResult<()>
{
    let path = path.as_ref();
    let mut json = ::serde_json::to_string_pretty(report)?;
    json.push('\n');
    crate::fsx::write(path, json)?;
    info!("Curve saved to {}", path.display());
    Ok(())
}

/// Read the points, fit them, and save whatever was asked for.
pub fn run_fit(args: &FitArgs) -> FailResult<FitReport>
{
    let settings = args.settings()?;
    let points = read_points(&args.points)?;

    let mut session = FitSession::new(&settings)?;
    session.extend_points(points);
    let fit = session.run_regression()?.clone();
    info!("Polynomial regression formula: y = {}", fit.coefficients);

    if let Some(path) = args.save_formula.as_ref() {
        session.save_formula(path)?;
    }

    let report = FitReport {
        degree: fit.degree.get(),
        coefficients: fit.coefficients.as_slice().to_vec(),
        formula: fit.coefficients.formula(),
        mse: fit.mse,
        curve: session.sample_curve(settings.curve_samples).unwrap_or_default(),
    };
    if let Some(path) = args.save_curve.as_ref() {
        write_curve(path, &report)?;
    }
    Ok(report)
}
