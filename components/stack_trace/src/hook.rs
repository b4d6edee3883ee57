//! The process-wide `prepare_stack_trace` hook.
//!
//! The host installs one assembler during environment setup and calls
//! [`prepare_stack_trace`] the first time an error's stack text is read.
//! Calling at most once per error is the host's job.

use crate::assembler::StackTraceAssembler;
use crate::call_site::CallSite;
use crate::error::{StackTraceError, StackTraceResult};
use core_types::ErrorIdentity;
use log::debug;
use parking_lot::Mutex;
use std::sync::OnceLock;

/// An install-once slot holding the assembler used for every error.
pub struct StackTraceHook {
    assembler: OnceLock<Mutex<StackTraceAssembler>>,
}

impl StackTraceHook {
    /// Creates an empty hook.
    pub const fn new() -> Self {
        Self {
            assembler: OnceLock::new(),
        }
    }

    /// Installs `assembler`.
    ///
    /// # Errors
    ///
    /// Returns [`StackTraceError::HookAlreadyInstalled`] on every call
    /// after the first.
    pub fn install(&self, assembler: StackTraceAssembler) -> StackTraceResult<()> {
        self.assembler
            .set(Mutex::new(assembler))
            .map_err(|_| StackTraceError::HookAlreadyInstalled)?;
        debug!("prepare_stack_trace hook installed");
        Ok(())
    }

    /// Whether an assembler has been installed.
    pub fn is_installed(&self) -> bool {
        self.assembler.get().is_some()
    }

    /// Formats the stack of `identity` with the installed assembler.
    ///
    /// # Errors
    ///
    /// Returns [`StackTraceError::HookNotInstalled`] before installation,
    /// and the assembler's own errors afterwards.
    pub fn prepare<S: CallSite>(
        &self,
        identity: &ErrorIdentity,
        call_sites: &[S],
    ) -> StackTraceResult<String> {
        let assembler = self
            .assembler
            .get()
            .ok_or(StackTraceError::HookNotInstalled)?;
        assembler.lock().format_stack_trace(identity, call_sites)
    }
}

impl Default for StackTraceHook {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_HOOK: StackTraceHook = StackTraceHook::new();

/// Installs the process-wide assembler.
pub fn install_prepare_stack_trace(assembler: StackTraceAssembler) -> StackTraceResult<()> {
    GLOBAL_HOOK.install(assembler)
}

/// Formats an error's stack with the process-wide assembler.
pub fn prepare_stack_trace<S: CallSite>(
    identity: &ErrorIdentity,
    call_sites: &[S],
) -> StackTraceResult<String> {
    GLOBAL_HOOK.prepare(identity, call_sites)
}
