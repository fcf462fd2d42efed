use crate::analysis::{mean_squared_error, sample_curve};
use crate::config::Settings;
use crate::FailResult;

use ::polyreg_fit::{regress, Coefficients, Degree, FitError, Point};
use ::std::path::Path;

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum SessionError {
    #[fail(display = "degree must be between 1 and {} (got {})", max, degree)]
    DegreeOutOfRange { degree: i64, max: u32 },

    #[fail(display = "No regression formula to save. Run regression first.")]
    NoFormula,

    #[fail(display = "{}", _0)]
    Fit(#[fail(cause)] FitError),
}

impl From<FitError> for SessionError {
    fn from(error: FitError) -> Self { SessionError::Fit(error) }
}

/// A successful regression, and the inputs it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    pub degree: Degree,
    pub coefficients: Coefficients,
    pub mse: f64,
}

/// Everything an interactive front end keeps between user actions.
///
/// The cached fit is dropped whenever the points or the degree change, so a
/// `Some` from [`FitSession::fit`] always describes the current inputs.
/// A failed regression leaves the cache exactly as it was.
#[derive(Debug, Clone)]
pub struct FitSession {
    points: Vec<Point>,
    degree: Degree,
    max_degree: u32,
    fit: Option<Fit>,
}

impl FitSession {
    /// Fails if the settings do not pass [`Settings::validate`].
    pub fn new(settings: &Settings) -> FailResult<Self>
    {
        settings.validate()?;
        Ok(FitSession {
            points: vec![],
            degree: settings.degree()?,
            max_degree: settings.max_degree,
            fit: None,
        })
    }

    pub fn points(&self) -> &[Point] { &self.points }
    pub fn degree(&self) -> Degree { self.degree }
    pub fn fit(&self) -> Option<&Fit> { self.fit.as_ref() }

    pub fn add_point(&mut self, point: Point)
    {
        self.points.push(point);
        self.fit = None;
    }

    pub fn extend_points<I: IntoIterator<Item = Point>>(&mut self, points: I)
    {
        self.points.extend(points);
        self.fit = None;
    }

    /// Forget all points (and therefore the fit).
    pub fn reset(&mut self)
    {
        self.points.clear();
        self.fit = None;
    }

    pub fn set_degree(&mut self, degree: i64) -> Result<(), SessionError>
    {
        let out_of_range = || SessionError::DegreeOutOfRange { degree, max: self.max_degree };
        if degree > i64::from(self.max_degree) {
            return Err(out_of_range());
        }
        let degree = Degree::new(degree).map_err(|_| out_of_range())?;

        if degree != self.degree {
            self.degree = degree;
            self.fit = None;
        }
        Ok(())
    }

    pub fn run_regression(&mut self) -> Result<&Fit, SessionError>
    {
        let needed = self.degree.num_coeffs();
        if self.points.len() < needed {
            warn!("Need at least {} points for degree {} regression", needed, self.degree);
            return Err(FitError::InsufficientPoints {
                points: self.points.len(),
                needed,
                degree: self.degree.get(),
            }.into());
        }

        let coefficients = match regress(&self.points, self.degree) {
            Ok(coefficients) => coefficients,
            Err(e) => {
                warn!("Regression failed: {}", e);
                return Err(e.into());
            },
        };
        let mse = match mean_squared_error(&coefficients, &self.points) {
            Some(mse) => mse,
            None => unreachable!("regression succeeded without points"),
        };
        info!("Mean Squared Error: {:.6}", mse);

        let degree = self.degree;
        Ok(&*self.fit.insert(Fit { degree, coefficients, mse }))
    }

    pub fn formula(&self) -> Option<String>
    { self.fit.as_ref().map(|fit| fit.coefficients.formula()) }

    pub fn sample_curve(&self, count: usize) -> Option<Vec<Point>>
    { self.fit.as_ref().map(|fit| sample_curve(&fit.coefficients, &self.points, count)) }

    pub fn save_formula<P: AsRef<Path>>(&self, path: P) -> FailResult<()>
    {
        match self.fit.as_ref() {
            Some(fit) => crate::cmd::write_formula(path, &fit.coefficients),
            None => Err(SessionError::NoFormula.into()),
        }
    }
}
