//! Main controller task
//!
//! Owns the session state and the board I/O for the lifetime of the
//! firmware.

use defmt::*;

use keystick_core::config::LockConfig;
use keystick_core::session::SessionContext;

use crate::board::BoardIo;
use crate::controller;

/// Controller task - main control loop
#[embassy_executor::task]
pub async fn controller_task(config: LockConfig, mut io: BoardIo) {
    info!("Controller task started");

    let ctx = SessionContext::new(config);
    controller::run(ctx, &mut io).await;
}
