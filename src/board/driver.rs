use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::api::client::BoardApi;

use super::reconciler::Board;

/// User-initiated action forwarded to the driver task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    Assign { kiosk: String, staff: String },
    Finalize(String),
    Cancel(String),
    Request(String),
}

/// Handle to a running poll driver. `shutdown` stops future ticks and waits
/// for the task; dropping the handle stops the task as well.
pub struct DriverHandle {
    commands: mpsc::Sender<BoardCommand>,
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl DriverHandle {
    /// Forward a command to the driver. Returns false once it has stopped.
    pub async fn send(&self, cmd: BoardCommand) -> bool {
        self.commands.send(cmd).await.is_ok()
    }

    /// Stop the driver and wait for its task to finish.
    pub async fn shutdown(self) {
        let _ = self.stop.send(true);
        let _ = self.task.await;
    }
}

/// Spawn the poll driver: a single task owning the board, reconciling once
/// immediately and then every `period`. Commands run on the same task, so
/// cycles and user actions never interleave their snapshot mutations.
pub fn spawn<A>(mut board: Board<A>, period: Duration) -> DriverHandle
where
    A: BoardApi + 'static,
{
    let (commands, mut command_rx) = mpsc::channel::<BoardCommand>(16);
    let (stop, mut stop_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticks = tokio::time::interval(period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = ticks.tick() => {
                    if let Err(err) = board.run_cycle().await {
                        warn!("reconciliation cycle skipped: {err:#}");
                    }
                }
                cmd = command_rx.recv() => {
                    let Some(cmd) = cmd else { break };
                    if let Err(err) = run_command(&mut board, cmd).await {
                        warn!("command failed: {err:#}");
                    }
                }
                _ = stop_rx.changed() => {
                    info!("poll driver stopping");
                    break;
                }
            }
        }
    });

    DriverHandle {
        commands,
        stop,
        task,
    }
}

async fn run_command<A: BoardApi>(board: &mut Board<A>, cmd: BoardCommand) -> anyhow::Result<()> {
    match cmd {
        BoardCommand::Assign { kiosk, staff } => board.assign(&kiosk, &staff).await,
        BoardCommand::Finalize(kiosk) => board.finalize(&kiosk).await,
        BoardCommand::Cancel(kiosk) => board.cancel(&kiosk).await,
        BoardCommand::Request(kiosk) => board.request_service(&kiosk).await,
    }
}
