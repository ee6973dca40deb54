pub mod sentry;

pub use sentry::SentryFairing;
