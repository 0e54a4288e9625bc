use crate::prelude::*;

/// the redraw loop: a cooperative task that re-schedules itself every
/// frame for the page's lifetime. the cancellation flag is checked
/// before each re-post
#[derive(Clone)]
pub struct AnimationLoop {
    running: Arc<AtomicBool>,
    frame_delay: Duration,
}
impl AnimationLoop {
    pub fn new(frame_delay: Duration) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            frame_delay,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(SeqCst)
    }

    pub fn stop(&self) {
        self.running.store(false, SeqCst);
    }

    /// drive update/draw/present against a surface until stopped.
    /// the engine sits behind a lock so event handlers keep feeding it
    /// while the loop runs
    pub async fn run<S: DrawSurface>(
        &self,
        engine: Arc<RwLock<ParticleEngine>>,
        surface: &mut S,
    ) -> FolioResult {
        self.running.store(true, SeqCst);

        while self.running.load(SeqCst) {
            let mut list = RenderableCollection::new();
            {
                let mut engine = engine.write();
                engine.update();
                engine.draw(&mut list);
            }
            surface.present(&list)?;

            tokio::time::sleep(self.frame_delay).await;
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loop_stops_when_cancelled() {
        let engine = Arc::new(RwLock::new(ParticleEngine::with_seed(
            ParticleSettings::default(),
            Vector2::new(800.0, 600.0),
            1,
        )));

        let animation = AnimationLoop::new(Duration::from_millis(1));
        let handle = {
            let animation = animation.clone();
            let engine = engine.clone();
            tokio::spawn(async move {
                let mut surface = HeadlessSurface::new(Vector2::new(800.0, 600.0));
                animation.run(engine, &mut surface).await.map(|_| surface.frames_presented)
            })
        };

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(animation.is_running());
        animation.stop();

        let frames = handle.await.unwrap().unwrap();
        assert!(frames > 0);
        assert!(!animation.is_running());
    }
}
