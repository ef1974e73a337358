use candle_core::Device;
use tracing::{debug, info, warn};

use super::error::EmbeddingError;

/// GPU backends compiled into this build, in preference order.
fn compiled_backends() -> Vec<(&'static str, fn() -> candle_core::Result<Device>)> {
    #[allow(unused_mut)]
    let mut backends: Vec<(&'static str, fn() -> candle_core::Result<Device>)> = Vec::new();

    #[cfg(feature = "metal")]
    backends.push(("metal", || Device::new_metal(0)));

    #[cfg(feature = "cuda")]
    backends.push(("cuda", || Device::new_cuda(0)));

    backends
}

/// Picks the encoder device: the first working GPU backend, otherwise CPU.
pub fn select_device() -> Result<Device, EmbeddingError> {
    let backends = compiled_backends();
    if backends.is_empty() {
        debug!("No GPU backend compiled, using CPU");
        return Ok(Device::Cpu);
    }

    let mut failures = Vec::with_capacity(backends.len());
    for (name, open) in backends {
        match open() {
            Ok(device) => {
                info!(backend = name, "Using GPU acceleration for encoder");
                return Ok(device);
            }
            Err(e) => {
                warn!(backend = name, error = %e, "GPU backend unavailable");
                failures.push(format!("{name}: {e}"));
            }
        }
    }

    warn!(reason = %failures.join("; "), "Falling back to CPU device");
    Ok(Device::Cpu)
}
