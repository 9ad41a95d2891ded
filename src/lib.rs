#![doc(test(attr(deny(warnings))))]

//! Rental Core derives monthly rent obligations from tenant contracts and
//! reconciles them against recorded payments, powering the balance and
//! up-to-date reporting of higher level property-management workflows.

pub mod cli;
pub mod errors;
pub mod portfolio;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Rental Core tracing initialized.");
    });
}
