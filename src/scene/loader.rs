//! Background texture loading with a latest-index-wins policy.
//!
//! Fetching and decoding face textures is slow and opaque (disk, HTTP,
//! whatever the host's [`TextureSource`] does), so it runs on a
//! dedicated thread. The main thread submits the active room's paths
//! and polls for results; queued requests are drained to the newest so
//! rapid teleporting never fetches rooms the user already left.
//!
//! Results carry the room index they were fetched for. Consumers must
//! discard any result whose index no longer matches the active room —
//! see [`NavEngine::tick`](crate::engine::NavEngine::tick).

use std::sync::mpsc;

use crate::error::PanoNavError;

/// Host-supplied texture fetcher.
///
/// Runs on the loader thread; blocking in `fetch` is fine. The payload
/// type is opaque to this crate — image bytes, GPU handles behind an
/// `Arc`, anything `Send + Clone`.
pub trait TextureSource: Send + 'static {
    /// The loaded texture set for one room.
    type Textures: Send + Clone + 'static;

    /// Fetch the six face textures, in material-slot order.
    ///
    /// # Errors
    ///
    /// [`PanoNavError::ResourceLoad`] (or any other variant) when a
    /// texture cannot be produced; the failure is reported to the
    /// consumer, never fatal to navigation.
    fn fetch(
        &mut self,
        paths: &[String; 6],
    ) -> Result<Self::Textures, PanoNavError>;
}

/// Three-state handle for one room's texture resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// The fetch has been submitted and has not settled.
    Pending,
    /// The fetch completed; the room can be rendered.
    Ready(T),
    /// The fetch failed; the previous room stays rendered.
    Failed(String),
}

impl<T> LoadState<T> {
    /// The ready payload, if any.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(t) => Some(t),
            Self::Pending | Self::Failed(_) => None,
        }
    }
}

/// A settled fetch, tagged with the room index it was requested for.
#[derive(Debug, Clone)]
pub struct LoadResult<T> {
    /// Room index the fetch was submitted for.
    pub index: u32,
    /// The textures, or the fetch error rendered to a string.
    pub outcome: Result<T, String>,
}

enum LoadRequest {
    Fetch { index: u32, paths: Box<[String; 6]> },
    Shutdown,
}

/// Background thread that fetches room textures off the main thread.
pub struct TextureLoader<T: Send + Clone + 'static> {
    request_tx: mpsc::Sender<LoadRequest>,
    result: triple_buffer::Output<Option<LoadResult<T>>>,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl<T: Send + Clone + 'static> TextureLoader<T> {
    /// Spawn the loader thread around a texture source.
    ///
    /// # Errors
    ///
    /// [`PanoNavError::ThreadSpawn`] if the background thread fails to
    /// spawn.
    pub fn spawn<S>(source: S) -> Result<Self, PanoNavError>
    where
        S: TextureSource<Textures = T>,
    {
        let (request_tx, request_rx) = mpsc::channel::<LoadRequest>();
        let (result_input, result_output) = triple_buffer::triple_buffer(&None);

        let thread = std::thread::Builder::new()
            .name("texture-loader".into())
            .spawn(move || {
                thread_loop(&request_rx, result_input, source);
            })
            .map_err(PanoNavError::ThreadSpawn)?;

        Ok(Self {
            request_tx,
            result: result_output,
            thread: Some(thread),
        })
    }

    /// Submit a fetch for the given room (non-blocking send).
    pub fn submit(&self, index: u32, paths: [String; 6]) {
        let _ = self.request_tx.send(LoadRequest::Fetch {
            index,
            paths: Box::new(paths),
        });
    }

    /// Non-blocking check for a settled fetch.
    pub fn try_recv(&mut self) -> Option<LoadResult<T>> {
        let _ = self.result.update();
        self.result.output_buffer_mut().take()
    }

    /// Shut down the background thread and wait for it to finish.
    pub fn shutdown(&mut self) {
        let _ = self.request_tx.send(LoadRequest::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl<T: Send + Clone + 'static> Drop for TextureLoader<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn thread_loop<S: TextureSource>(
    request_rx: &mpsc::Receiver<LoadRequest>,
    mut result_input: triple_buffer::Input<Option<LoadResult<S::Textures>>>,
    mut source: S,
) {
    while let Ok(request) = request_rx.recv() {
        match drain_latest(request, request_rx) {
            LoadRequest::Shutdown => break,
            LoadRequest::Fetch { index, paths } => {
                log::debug!("fetching textures for room {index}");
                let outcome =
                    source.fetch(&paths).map_err(|e| e.to_string());
                if let Err(msg) = &outcome {
                    log::warn!("texture fetch for room {index} failed: {msg}");
                }
                result_input.write(Some(LoadResult { index, outcome }));
            }
        }
    }
}

/// Drain queued requests, keeping only the latest.
///
/// A rapid teleport sequence leaves a backlog of fetches for rooms the
/// user has already left; only the newest request matters. Shutdown
/// sticks once seen.
fn drain_latest(
    initial: LoadRequest,
    rx: &mpsc::Receiver<LoadRequest>,
) -> LoadRequest {
    let mut latest = initial;
    while let Ok(newer) = rx.try_recv() {
        if matches!(latest, LoadRequest::Shutdown) {
            break;
        }
        latest = newer;
    }
    latest
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    /// Source that "loads" by echoing the requested paths.
    struct EchoSource;

    impl TextureSource for EchoSource {
        type Textures = Vec<String>;

        fn fetch(
            &mut self,
            paths: &[String; 6],
        ) -> Result<Self::Textures, PanoNavError> {
            Ok(paths.to_vec())
        }
    }

    /// Source that fails for a configured room prefix.
    struct FlakySource {
        fail_on: String,
    }

    impl TextureSource for FlakySource {
        type Textures = Vec<String>;

        fn fetch(
            &mut self,
            paths: &[String; 6],
        ) -> Result<Self::Textures, PanoNavError> {
            if paths[0].starts_with(&self.fail_on) {
                return Err(PanoNavError::ResourceLoad(format!(
                    "missing {}",
                    paths[0]
                )));
            }
            Ok(paths.to_vec())
        }
    }

    fn paths(room: u32) -> [String; 6] {
        std::array::from_fn(|slot| format!("pano/pano_{room}/{slot}.jpg"))
    }

    fn wait_for<T: Send + Clone + 'static>(
        loader: &mut TextureLoader<T>,
    ) -> LoadResult<T> {
        for _ in 0..500 {
            if let Some(result) = loader.try_recv() {
                return result;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        panic!("loader never produced a result");
    }

    #[test]
    fn fetches_and_tags_with_index() {
        let mut loader = TextureLoader::spawn(EchoSource).unwrap();
        loader.submit(3, paths(3));
        let result = wait_for(&mut loader);
        assert_eq!(result.index, 3);
        assert_eq!(result.outcome.unwrap()[0], "pano/pano_3/0.jpg");
    }

    #[test]
    fn failure_is_reported_not_fatal() {
        let mut loader = TextureLoader::spawn(FlakySource {
            fail_on: "pano/pano_7".to_owned(),
        })
        .unwrap();
        loader.submit(7, paths(7));
        let result = wait_for(&mut loader);
        assert_eq!(result.index, 7);
        assert!(result.outcome.is_err());

        // The loader keeps serving after a failure.
        loader.submit(8, paths(8));
        let result = wait_for(&mut loader);
        assert_eq!(result.index, 8);
        assert!(result.outcome.is_ok());
    }

    #[test]
    fn result_slot_keeps_only_the_newest() {
        let mut loader = TextureLoader::spawn(EchoSource).unwrap();
        loader.submit(0, paths(0));
        loader.submit(1, paths(1));
        loader.submit(2, paths(2));

        // Let every queued fetch settle, then read: the slot holds the
        // newest result that was written.
        std::thread::sleep(Duration::from_millis(50));
        let mut last = wait_for(&mut loader).index;
        while let Some(result) = loader.try_recv() {
            last = result.index;
        }
        assert_eq!(last, 2);
    }

    #[test]
    fn shutdown_joins_the_thread() {
        let mut loader = TextureLoader::spawn(EchoSource).unwrap();
        loader.submit(0, paths(0));
        loader.shutdown();
        assert!(loader.thread.is_none());
    }
}
