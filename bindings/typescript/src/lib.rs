use napi::bindgen_prelude::*;
use napi::Task;
use napi_derive::napi;

fn to_napi_err(e: gridblur_core::BlurError) -> Error {
    Error::from_reason(e.to_string())
}

/// Blur raw RGB pixel data with the 3x3 kernel.
///
/// @param data - Raw pixel bytes in RGB order, row-major (length must be width * height * 3).
/// @param width - Image width in pixels (must be > 0).
/// @param height - Image height in pixels (must be > 0).
/// @returns A Buffer of the same length containing the blurred pixels.
#[napi]
pub fn blur(data: Buffer, width: i64, height: i64) -> Result<Buffer> {
    let pixels = gridblur_core::blur_rgb(data.as_ref(), width, height).map_err(to_napi_err)?;
    Ok(Buffer::from(pixels))
}

/// Blur from a Uint8Array (for browser/Deno compatibility).
///
/// @param data - Raw pixel bytes as Uint8Array in RGB order.
/// @param width - Image width in pixels (must be > 0).
/// @param height - Image height in pixels (must be > 0).
/// @returns A Uint8Array of the same length containing the blurred pixels.
#[napi]
pub fn blur_uint8_array(data: Uint8Array, width: i64, height: i64) -> Result<Uint8Array> {
    let pixels = gridblur_core::blur_rgb(data.as_ref(), width, height).map_err(to_napi_err)?;
    Ok(Uint8Array::from(pixels))
}

// --- Async version (runs on libuv thread pool) ---

pub struct BlurTask {
    data: Vec<u8>,
    width: i64,
    height: i64,
}

impl Task for BlurTask {
    type Output = Vec<u8>;
    type JsValue = Buffer;

    fn compute(&mut self) -> Result<Self::Output> {
        gridblur_core::blur_rgb(&self.data, self.width, self.height).map_err(to_napi_err)
    }

    fn resolve(&mut self, _env: Env, output: Self::Output) -> Result<Self::JsValue> {
        Ok(Buffer::from(output))
    }
}

/// Async version of blur that runs on the libuv thread pool.
/// Returns a Promise<Buffer>.
///
/// @param data - Raw pixel bytes in RGB order (length must be width * height * 3).
/// @param width - Image width in pixels (must be > 0).
/// @param height - Image height in pixels (must be > 0).
/// @returns A Promise resolving to a Buffer of blurred RGB pixel data.
#[napi]
pub fn blur_async(data: Buffer, width: i64, height: i64) -> AsyncTask<BlurTask> {
    AsyncTask::new(BlurTask {
        data: data.to_vec(),
        width,
        height,
    })
}
