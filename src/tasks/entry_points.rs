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

//! Functions called by the binary shims.

use crate::FailResult;
use crate::cmd::{run_fit, FitArgs};
use crate::ui::cli_deserialize::CliDeserialize;
use crate::ui::logging::GlobalLogger;

use ::std::ffi::OsStr;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        // the logger may not exist yet if the failure was in argument parsing
        let logged = log_enabled!(::log::Level::Error);
        for cause in e.iter_chain() {
            match logged {
                true => error!("{}", cause),
                false => eprintln!("error: {}", cause),
            }
        }

        if ::std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            match logged {
                true => error!("{}", e.backtrace()),
                false => eprintln!("{}", e.backtrace()),
            }
        }
        ::std::process::exit(1);
    });
}

// %% CRATES: binary: polyreg %%
pub fn fit() {
    wrap_result_main(|| {
        let (app, de) = CliDeserialize::augment_clap_app({
            ::clap::App::new("polyreg")
                .version(crate_version!())
                .about("Least-squares polynomial fit of 2-D sample points")
        });
        let matches = app.get_matches();
        let (logger, args): (GlobalLogger, FitArgs) = de.resolve_args(&matches)?;
        logger.apply()?;

        let report = run_fit(&args)?;
        println!("y = {}", report.formula);
        Ok(())
    });
}
