//! Per-companion behavior override controller.
//!
//! The host's override calls are asynchronous and must never overlap for one
//! actor. Each companion therefore gets a driver task that owns every host
//! call for that actor and performs them strictly one at a time:
//!
//! ```text
//! set_desired(B) ──► watch<Option<FormId>> ──┐
//! clear_all()    ──► mpsc<Command> ──────────┼──► driver: remove(old) ─► add(B) ─► evaluate
//! drop / retire  ──► mpsc closed ────────────┘            └─► teardown on exit
//! ```
//!
//! Callers only ever write the *desired* target. The driver compares it with
//! what it has actually applied and re-reads it between stages, so a burst of
//! requests collapses into a single transition to the latest one.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use companion_core::{ActorId, CompanionClass, FormId, HostError, ObjectHandle, OverridePackages};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use crate::host::{HandlePolicy, OverrideHost};

/// Called once every support override has been removed.
pub type Completion = Box<dyn FnOnce() + Send>;

/// Everything a driver needs besides its actor.
#[derive(Clone)]
pub struct OverrideContext {
    pub overrides: Arc<dyn OverrideHost>,
    pub handles: Arc<dyn HandlePolicy>,
    pub packages: OverridePackages,
    pub priority: i32,
    pub ack_timeout: Option<Duration>,
}

enum Command {
    ClearAll {
        evaluate: bool,
        on_complete: Option<Completion>,
    },
}

/// Handle to a companion's override driver.
///
/// Dropping the controller (or calling [`retire`](Self::retire)) lets the
/// driver finish its current stage, remove what it applied and exit.
pub struct OverrideController {
    actor: ActorId,
    class: CompanionClass,
    target: Arc<watch::Sender<Option<FormId>>>,
    commands: mpsc::UnboundedSender<Command>,
    driver: JoinHandle<()>,
}

impl OverrideController {
    /// Spawns the driver on the current tokio runtime.
    pub fn spawn(actor: ActorId, class: CompanionClass, context: OverrideContext) -> Self {
        let (target, target_rx) = watch::channel(None);
        let target = Arc::new(target);
        let (commands, command_rx) = mpsc::unbounded_channel();

        let driver = Driver {
            actor,
            class,
            context,
            target: Arc::clone(&target),
            target_rx,
            commands: command_rx,
            applied: None,
        };
        let driver = tokio::spawn(driver.run());

        Self {
            actor,
            class,
            target,
            commands,
            driver,
        }
    }

    pub fn actor(&self) -> ActorId {
        self.actor
    }

    pub fn class(&self) -> CompanionClass {
        self.class
    }

    /// The last requested target.
    pub fn desired(&self) -> Option<FormId> {
        *self.target.borrow()
    }

    /// Requests a new override target. Returns `false` if it is already the
    /// stored target, in which case nothing is scheduled.
    pub fn set_desired(&self, target: Option<FormId>) -> bool {
        self.target.send_if_modified(|current| {
            if *current == target {
                return false;
            }
            *current = target;
            true
        })
    }

    /// Removes every support override in teardown order, then calls
    /// `on_complete`. Only the support class holds these overrides; for other
    /// classes nothing is scheduled and `false` is returned.
    pub fn clear_all(&self, on_complete: impl FnOnce() + Send + 'static) -> bool {
        self.schedule_clear(false, Some(Box::new(on_complete)))
    }

    /// [`clear_all`](Self::clear_all) followed by a package re-evaluation on
    /// the same driver.
    pub fn clear_and_evaluate(&self) -> bool {
        self.schedule_clear(true, None)
    }

    fn schedule_clear(&self, evaluate: bool, on_complete: Option<Completion>) -> bool {
        if !self.class.is_support() {
            return false;
        }
        self.commands
            .send(Command::ClearAll {
                evaluate,
                on_complete,
            })
            .is_ok()
    }

    /// Stops accepting requests and hands back the driver so the caller can
    /// wait for teardown to finish.
    pub fn retire(self) -> JoinHandle<()> {
        let Self {
            actor,
            class,
            commands,
            driver,
            ..
        } = self;
        drop(commands);
        debug!(class = class.tag(), %actor, "override controller retired");
        driver
    }
}

struct Driver {
    actor: ActorId,
    class: CompanionClass,
    context: OverrideContext,
    target: Arc<watch::Sender<Option<FormId>>>,
    target_rx: watch::Receiver<Option<FormId>>,
    commands: mpsc::UnboundedReceiver<Command>,
    /// What the host currently reflects, as far as acknowledgments tell.
    applied: Option<FormId>,
}

impl Driver {
    async fn run(mut self) {
        loop {
            match self.commands.try_recv() {
                Ok(command) => {
                    self.handle(command).await;
                    continue;
                }
                Err(mpsc::error::TryRecvError::Disconnected) => break,
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            let desired = *self.target_rx.borrow_and_update();
            if desired != self.applied {
                self.transition(desired).await;
                continue;
            }

            tokio::select! {
                biased;
                command = self.commands.recv() => match command {
                    Some(command) => self.handle(command).await,
                    None => break,
                },
                changed = self.target_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        self.teardown().await;
    }

    async fn handle(&mut self, command: Command) {
        match command {
            Command::ClearAll {
                evaluate,
                on_complete,
            } => {
                if !self.clear_all().await {
                    return;
                }
                if evaluate {
                    if let Err(error) = self.evaluate().await {
                        warn!(class = self.class.tag(), %error, "re-evaluation after clear failed");
                    }
                }
                if let Some(on_complete) = on_complete {
                    on_complete();
                }
            }
        }
    }

    /// Moves the host from `applied` towards the desired target.
    async fn transition(&mut self, pursued: Option<FormId>) {
        if let Some(current) = self.applied {
            if let Err(error) = self.remove(current).await {
                self.abandon(pursued, "remove_override", error);
                return;
            }
            self.applied = None;
        }

        if self.commands.is_closed() {
            return;
        }

        // A newer request may have arrived while the removal was in flight.
        let desired = *self.target_rx.borrow_and_update();
        if let Some(package) = desired {
            if let Err(error) = self.add(package).await {
                self.abandon(desired, "add_override", error);
                return;
            }
            self.applied = Some(package);
        }

        if self.commands.is_closed() {
            return;
        }
        match self.evaluate().await {
            Ok(()) => debug!(
                class = self.class.tag(),
                package = self.label(self.applied),
                "override applied"
            ),
            Err(error) => warn!(class = self.class.tag(), %error, "package evaluation failed"),
        }
    }

    /// Gives up on the current stage. The stored target is reset to what the
    /// host reflects unless a newer request replaced it meanwhile; no retry is
    /// scheduled.
    fn abandon(&self, pursued: Option<FormId>, stage: &'static str, error: HostError) {
        let applied = self.applied;
        let reset = self.target.send_if_modified(|current| {
            if *current != pursued || *current == applied {
                return false;
            }
            *current = applied;
            true
        });
        warn!(
            class = self.class.tag(),
            actor = %self.actor,
            stage,
            %error,
            reset,
            "override stage abandoned"
        );
    }

    /// Removes the four support overrides in order. Returns `false` if the
    /// chain broke.
    async fn clear_all(&mut self) -> bool {
        for package in self.context.packages.teardown_order() {
            if let Err(error) = self.remove(package).await {
                warn!(
                    class = self.class.tag(),
                    package = self.context.packages.label(package),
                    %error,
                    "clear chain broken"
                );
                return false;
            }
            if self.applied == Some(package) {
                self.applied = None;
            }
        }
        debug!(class = self.class.tag(), "support overrides cleared");
        true
    }

    async fn teardown(&mut self) {
        if self.class.is_support() {
            self.clear_all().await;
        } else if self.applied.is_some() {
            let result = match self.handle_for() {
                Ok(handle) => {
                    let overrides = Arc::clone(&self.context.overrides);
                    self.acknowledged("clear_override", overrides.clear_override(handle))
                        .await
                }
                Err(error) => Err(error),
            };
            match result {
                Ok(()) => self.applied = None,
                Err(error) => warn!(class = self.class.tag(), %error, "teardown clear failed"),
            }
        }
        info!(class = self.class.tag(), actor = %self.actor, "override driver stopped");
    }

    async fn add(&self, package: FormId) -> Result<(), HostError> {
        let handle = self.handle_for()?;
        trace!(class = self.class.tag(), package = self.label(Some(package)), "add_override");
        self.acknowledged(
            "add_override",
            self.context
                .overrides
                .add_override(handle, package, self.context.priority, true),
        )
        .await
    }

    async fn remove(&self, package: FormId) -> Result<(), HostError> {
        let handle = self.handle_for()?;
        trace!(class = self.class.tag(), package = self.label(Some(package)), "remove_override");
        self.acknowledged(
            "remove_override",
            self.context.overrides.remove_override(handle, package),
        )
        .await
    }

    async fn evaluate(&self) -> Result<(), HostError> {
        let handle = self.handle_for()?;
        trace!(class = self.class.tag(), "evaluate_package");
        self.acknowledged(
            "evaluate_package",
            self.context.overrides.evaluate_package(handle),
        )
        .await
    }

    fn handle_for(&self) -> Result<ObjectHandle, HostError> {
        self.context.handles.handle_for(self.actor)
    }

    async fn acknowledged(
        &self,
        function: &'static str,
        call: impl Future<Output = Result<(), HostError>>,
    ) -> Result<(), HostError> {
        match self.context.ack_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or(Err(HostError::AckTimeout { function })),
            None => call.await,
        }
    }

    fn label(&self, package: Option<FormId>) -> &'static str {
        match package {
            Some(package) => self.context.packages.label(package),
            None => "follow",
        }
    }
}
