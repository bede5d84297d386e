//! Declarative configuration and lifecycle save/restore.
//!
//! Both widgets snapshot their numeric parameters into plain serde
//! structs. The host round-trips them through whatever persistence
//! it owns; `serde_json` is the reference mechanism in the tests.
//! Restore re-applies the clamping rules, so a hostile snapshot
//! cannot smuggle out-of-range values past the setters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notches::Notches;
use crate::pointer::{Pointer, PointerStatus};

/// Current snapshot layout version.
pub const STATE_VERSION: u32 = 1;

fn default_version() -> u32 {
    STATE_VERSION
}

#[derive(Debug, Error)]
pub enum StateError {
    #[error("unsupported state version {found} (expected {STATE_VERSION})")]
    UnsupportedVersion { found: u32 },
}

/// Saved parameters of a [`Notches`] widget.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotchesState {
    #[serde(default = "default_version")]
    pub version: u32,
    pub count: u32,
    pub length: f32,
    #[serde(default = "default_sweep")]
    pub sweep_degrees: f32,
}

fn default_sweep() -> f32 {
    360.0
}

/// Saved parameters of a [`Pointer`] widget.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    #[serde(default = "default_version")]
    pub version: u32,
    pub position: f32,
    pub radius: f32,
    pub halo_width: f32,
    pub halo_alpha: u8,
    #[serde(default)]
    pub status: PointerStatus,
}

impl Notches {
    pub fn save_state(&self) -> NotchesState {
        NotchesState {
            version: STATE_VERSION,
            count: self.count(),
            length: self.length(),
            sweep_degrees: self.sweep_degrees(),
        }
    }

    pub fn restore_state(&mut self, state: &NotchesState) -> Result<(), StateError> {
        if state.version != STATE_VERSION {
            return Err(StateError::UnsupportedVersion {
                found: state.version,
            });
        }

        self.set_count(state.count.min(i32::MAX as u32) as i32);
        self.set_length(state.length);
        self.set_sweep_degrees(state.sweep_degrees);
        Ok(())
    }
}

impl Pointer {
    pub fn save_state(&self) -> PointerState {
        PointerState {
            version: STATE_VERSION,
            position: self.position(),
            radius: self.radius(),
            halo_width: self.halo_width(),
            halo_alpha: self.halo_alpha(),
            status: self.status(),
        }
    }

    pub fn restore_state(&mut self, state: &PointerState) -> Result<(), StateError> {
        if state.version != STATE_VERSION {
            return Err(StateError::UnsupportedVersion {
                found: state.version,
            });
        }

        self.set_position(state.position);
        self.set_radius(state.radius);
        self.set_halo_width(state.halo_width);
        self.set_halo_alpha(i32::from(state.halo_alpha));
        self.set_status(state.status);
        Ok(())
    }
}
