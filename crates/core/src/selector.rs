//! Interpreter selection engine
//!
//! [`KernelSelector`] mediates between the host's discovery, installer,
//! persistence, picker and telemetry services in a fixed order:
//!
//! 1. the in-memory cached selection,
//! 2. the persisted selection (revalidated against discovery),
//! 3. the discovery service's active interpreter, raced against a
//!    cancellation token — a cancelled lookup falls back to the
//!    configured default,
//! 4. dependency check (and install, when allowed),
//! 5. persist, cache, notify observers.
//!
//! The cache is written only after persistence succeeds, and observers are
//! notified only when the selected path actually changes.

use crate::cancellation::CancellationToken;
use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::events::{SelectionEvent, SelectionNotifier};
use crate::interfaces::{
    DependencyInstaller, InterpreterDiscovery, InterpreterPicker, ResolutionSource,
    SelectionStore, SelectionTelemetry, TelemetrySink,
};
use crate::types::{InstallOutcome, PythonInterpreter};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};
use tracing::{debug, warn};

/// Selects and validates the interpreter that launches the kernel backend.
pub struct KernelSelector {
    config: KernelConfig,
    discovery: Arc<dyn InterpreterDiscovery>,
    installer: Arc<dyn DependencyInstaller>,
    store: Arc<dyn SelectionStore>,
    picker: Arc<dyn InterpreterPicker>,
    telemetry: Arc<dyn TelemetrySink>,
    cached: RwLock<Option<PythonInterpreter>>,
    notifier: SelectionNotifier,
}

impl KernelSelector {
    pub fn new(
        config: KernelConfig,
        discovery: Arc<dyn InterpreterDiscovery>,
        installer: Arc<dyn DependencyInstaller>,
        store: Arc<dyn SelectionStore>,
        picker: Arc<dyn InterpreterPicker>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        Self {
            config,
            discovery,
            installer,
            store,
            picker,
            telemetry,
            cached: RwLock::new(None),
            notifier: SelectionNotifier::new(),
        }
    }

    /// Subscribe to selection changes.
    pub fn subscribe(&self) -> broadcast::Receiver<SelectionEvent> {
        self.notifier.subscribe()
    }

    /// The cached selection, without running the resolution chain.
    pub async fn current(&self) -> Option<PythonInterpreter> {
        self.cached.read().await.clone()
    }

    /// Resolve the interpreter for the kernel backend.
    pub async fn resolve(
        &self,
        workspace: &Path,
        token: &CancellationToken,
    ) -> Result<PythonInterpreter> {
        match self.resolve_inner(workspace, token).await {
            Ok(interpreter) => Ok(interpreter),
            Err(err) => {
                self.telemetry.record(&SelectionTelemetry::ResolutionFailed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    async fn resolve_inner(
        &self,
        workspace: &Path,
        token: &CancellationToken,
    ) -> Result<PythonInterpreter> {
        if let Some(cached) = self.cached.read().await.clone() {
            debug!(path = %cached.path.display(), "using cached interpreter");
            self.telemetry.record(&SelectionTelemetry::Resolved {
                source: ResolutionSource::Cached,
            });
            return Ok(cached);
        }

        if let Some(persisted) = self.persisted_interpreter(workspace).await? {
            return self
                .commit(workspace, persisted, ResolutionSource::Persisted)
                .await;
        }

        let (interpreter, source) = self.lookup_active(workspace, token).await?;
        self.commit(workspace, interpreter, source).await
    }

    /// Let the user choose an interpreter from the discovery candidates.
    ///
    /// Returns `Ok(None)` when the picker is dismissed; the previous
    /// selection stays untouched in that case.
    pub async fn select_interpreter(
        &self,
        workspace: &Path,
        token: &CancellationToken,
    ) -> Result<Option<PythonInterpreter>> {
        let candidates = tokio::select! {
            listed = self.discovery.list_interpreters(workspace) => listed?,
            () = token.cancelled() => {
                self.telemetry.record(&SelectionTelemetry::LookupCancelled);
                return Err(Error::Cancelled);
            }
        };

        if candidates.is_empty() {
            return Err(Error::InterpreterNotFound);
        }

        let Some(choice) = self.picker.pick(&candidates).await? else {
            debug!("interpreter picker dismissed");
            return Ok(None);
        };

        self.commit(workspace, choice, ResolutionSource::Manual)
            .await
            .map(Some)
    }

    /// Programmatically select the interpreter at `path`.
    pub async fn use_interpreter(
        &self,
        workspace: &Path,
        path: &Path,
    ) -> Result<PythonInterpreter> {
        let interpreter = self
            .discovery
            .interpreter_at(path)
            .await?
            .ok_or_else(|| Error::InvalidInterpreter(path.display().to_string()))?;
        self.commit(workspace, interpreter, ResolutionSource::Manual)
            .await
    }

    /// Forget the selection, both cached and persisted.
    pub async fn reset(&self, workspace: &Path) -> Result<()> {
        self.store.clear(workspace).await?;
        let previous = self.cached.write().await.take();
        if previous.is_some() {
            self.notifier.emit(SelectionEvent {
                previous,
                current: None,
            });
        }
        self.telemetry.record(&SelectionTelemetry::SelectionCleared);
        Ok(())
    }

    /// Load the persisted path and revalidate it against discovery.
    /// Stale entries are cleared so they cannot shadow a working
    /// interpreter on the next resolve.
    async fn persisted_interpreter(&self, workspace: &Path) -> Result<Option<PythonInterpreter>> {
        let Some(path) = self.store.load(workspace).await? else {
            return Ok(None);
        };

        match self.discovery.interpreter_at(&path).await? {
            Some(interpreter) => Ok(Some(interpreter)),
            None => {
                warn!(
                    path = %path.display(),
                    "persisted interpreter no longer available, clearing"
                );
                self.store.clear(workspace).await?;
                Ok(None)
            }
        }
    }

    /// Race the discovery lookup against the cancellation token.
    async fn lookup_active(
        &self,
        workspace: &Path,
        token: &CancellationToken,
    ) -> Result<(PythonInterpreter, ResolutionSource)> {
        tokio::select! {
            found = self.discovery.active_interpreter(workspace) => {
                match found? {
                    Some(interpreter) => Ok((interpreter, ResolutionSource::Active)),
                    None => match self.configured_default() {
                        Some(fallback) => Ok((fallback, ResolutionSource::ConfiguredDefault)),
                        None => Err(Error::InterpreterNotFound),
                    },
                }
            }
            () = token.cancelled() => {
                self.telemetry.record(&SelectionTelemetry::LookupCancelled);
                match self.configured_default() {
                    Some(fallback) => Ok((fallback, ResolutionSource::ConfiguredDefault)),
                    None => Err(Error::Cancelled),
                }
            }
        }
    }

    /// The configured default, built without consulting discovery: after a
    /// cancelled lookup there is nothing left to wait on.
    fn configured_default(&self) -> Option<PythonInterpreter> {
        self.config
            .default_interpreter
            .as_ref()
            .map(|path| PythonInterpreter::new(path.clone()))
    }

    /// Shared tail of every successful selection: ensure dependencies,
    /// persist, cache, notify, record telemetry — in that order.
    async fn commit(
        &self,
        workspace: &Path,
        interpreter: PythonInterpreter,
        source: ResolutionSource,
    ) -> Result<PythonInterpreter> {
        self.ensure_dependencies(&interpreter).await?;
        self.store.save(workspace, &interpreter.path).await?;

        let previous = {
            let mut cached = self.cached.write().await;
            cached.replace(interpreter.clone())
        };

        let changed = previous.as_ref().map(|p| &p.path) != Some(&interpreter.path);
        if changed {
            self.notifier.emit(SelectionEvent {
                previous,
                current: Some(interpreter.clone()),
            });
        }

        debug!(
            path = %interpreter.path.display(),
            ?source,
            "interpreter selected"
        );
        self.telemetry
            .record(&SelectionTelemetry::Resolved { source });
        Ok(interpreter)
    }

    /// Check required packages and install the missing ones when the
    /// config allows it. Fails without touching cache or store.
    async fn ensure_dependencies(&self, interpreter: &PythonInterpreter) -> Result<()> {
        let required = &self.config.required_dependencies;
        if required.is_empty() {
            return Ok(());
        }

        let missing = self
            .installer
            .missing_dependencies(interpreter, required)
            .await?;
        if missing.is_empty() {
            return Ok(());
        }

        if !self.config.install_missing {
            let names: Vec<&str> = missing.iter().map(|d| d.package.as_str()).collect();
            return Err(Error::Install(format!(
                "missing kernel dependencies: {}",
                names.join(", ")
            )));
        }

        match self.installer.install(interpreter, &missing).await? {
            InstallOutcome::Installed => {
                self.telemetry
                    .record(&SelectionTelemetry::DependenciesInstalled {
                        count: missing.len(),
                    });
                Ok(())
            }
            InstallOutcome::Declined => {
                Err(Error::Install("dependency installation declined".into()))
            }
            InstallOutcome::Failed(reason) => Err(Error::Install(reason)),
        }
    }
}
