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

extern crate polyreg_fit;

extern crate ansi_term;
extern crate fern;
extern crate serde;
extern crate serde_json;
extern crate serde_yaml;
extern crate serde_ignored;
#[macro_use] extern crate clap;
#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

#[cfg(test)] extern crate tempdir;
#[cfg(test)] #[macro_use] extern crate polyreg_assert_close;
#[cfg(test)] #[macro_use] extern crate pretty_assertions;

pub type FailResult<T> = Result<T, failure::Error>;

mod fsx;
mod ui;
mod analysis;
mod points;
mod session;
mod cmd;
pub mod config;
pub mod entry_points;

pub use crate::config::Settings;
pub use crate::analysis::{mean_squared_error, sample_curve};
pub use crate::points::{parse_points_text, read_points, PointsParseError};
pub use crate::session::{Fit, FitSession, SessionError};
pub use crate::cmd::{run_fit, write_curve, write_formula, FitArgs, FitReport};
