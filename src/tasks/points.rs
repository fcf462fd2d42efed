//! Reading sample points.
//!
//! Two formats are understood:
//!
//! * Plain text (the default): one `x y` pair per line, separated by
//!   whitespace and/or a comma.  Blank lines and `#` comments are ignored.
//! * YAML (`.yaml` or `.yml`): a list of `{x: .., y: ..}` mappings.

use crate::FailResult;

use ::polyreg_fit::Point;
use ::std::path::Path;

#[derive(Debug, Fail, Clone, PartialEq)]
#[fail(display = "line {}: {}", line, message)]
pub struct PointsParseError {
    /// 1-based.
    pub line: usize,
    pub message: String,
}

pub fn read_points<P: AsRef<Path>>(path: P) -> FailResult<Vec<Point>>
{
    let path = path.as_ref();
    let text = crate::fsx::read_to_string(path)?;

    let points = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => {
            let points: Vec<Point> = ::serde_yaml::from_str(&text)
                .map_err(|e| format_err!("in points file '{}': {}", path.display(), e))?;
            if let Some(p) = points.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
                bail!("in points file '{}': non-finite point ({}, {})", path.display(), p.x, p.y);
            }
            points
        },
        _ => {
            parse_points_text(&text)
                .map_err(|e| format_err!("in points file '{}': {}", path.display(), e))?
        },
    };
    debug!("read {} points from '{}'", points.len(), path.display());
    Ok(points)
}

pub fn parse_points_text(text: &str) -> Result<Vec<Point>, PointsParseError>
{
    let mut points = vec![];
    for (i, line) in text.lines().enumerate() {
        let err = |message: String| PointsParseError { line: i + 1, message };

        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let words: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|w| !w.is_empty())
            .collect();

        match words.len() {
            0 => continue,
            2 => {},
            n => return Err(err(format!("expected 2 numbers, found {}", n))),
        }

        let parse = |word: &str| match word.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(err(format!("non-finite value '{}'", word))),
            Err(_) => Err(err(format!("cannot parse '{}' as a number", word))),
        };
        points.push(Point::new(parse(words[0])?, parse(words[1])?));
    }
    Ok(points)
}
