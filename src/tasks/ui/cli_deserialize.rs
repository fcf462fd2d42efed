use crate::FailResult;

use ::clap::{App, ArgMatches};
use ::std::marker::PhantomData;

/// A group of command-line arguments that knows how to declare itself on a
/// clap `App` and how to read itself back out of the matches.
///
/// Groups compose as tuples, so an entry point can write
///
/// ```text
/// let (app, de) = CliDeserialize::augment_clap_app(app);
/// let (log_args, fit_args): (LogArgs, FitArgs) = de.resolve_args(&app.get_matches())?;
/// ```
pub(crate) trait CliDeserialize: Sized {
    fn augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> (App<'a, 'b>, ClapDeserializer<Self>)
    { (Self::_augment_clap_app(app), ClapDeserializer(PhantomData)) }

    /// Use `augment_clap_app` instead.
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b>;

    /// Use `ClapDeserializer::resolve_args` instead.
    fn _resolve_args(matches: &ArgMatches<'_>) -> FailResult<Self>;
}

/// Witness that an `App` was given the arguments for `A`.
pub(crate) struct ClapDeserializer<A>(PhantomData<A>);

impl<A: CliDeserialize> ClapDeserializer<A> {
    pub(crate) fn resolve_args(self, matches: &ArgMatches<'_>) -> FailResult<A>
    { A::_resolve_args(matches) }
}

impl<A, B> CliDeserialize for (A, B)
where
    A: CliDeserialize,
    B: CliDeserialize,
{
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b>
    { B::_augment_clap_app(A::_augment_clap_app(app)) }

    fn _resolve_args(matches: &ArgMatches<'_>) -> FailResult<Self>
    { Ok((A::_resolve_args(matches)?, B::_resolve_args(matches)?)) }
}
