use folio_client::prelude::*;

#[macro_use]
extern crate log;

const SURFACE_SIZE: Vector2 = Vector2::new(1280.0, 720.0);

// main fn
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| DATA_DIR.to_owned());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("error creating runtime");

    runtime.block_on(async move {
        trace!("loading page from {data_dir:?}");
        let mut page = Page::new(data_dir, SURFACE_SIZE);
        let _ = page.load().await.log_error_message("page load failed");

        // headless demo: hover the first achievement card, run the
        // animation loop for a few seconds, then cancel it
        let animation = AnimationLoop::new(Duration::from_millis(16));
        let engine = page.engine();

        let loop_task = {
            let animation = animation.clone();
            tokio::spawn(async move {
                let mut surface = HeadlessSurface::new(SURFACE_SIZE);
                let result = animation.run(engine, &mut surface).await;
                result.map(|_| surface.frames_presented)
            })
        };

        page.card_hover_enter(0);
        for step in 0..10 {
            page.card_hover_move(Vector2::new(100.0 + step as f32 * 5.0, 100.0));
            tokio::time::sleep(Duration::from_millis(100)).await;
            info!("{} live particles", page.particle_count());
        }
        page.card_hover_leave();

        // let the burst play out, then stop the loop
        tokio::time::sleep(Duration::from_secs(2)).await;
        animation.stop();

        match loop_task.await {
            Ok(Ok(frames)) => info!("presented {frames} frames"),
            Ok(Err(e)) => error!("animation loop failed: {e}"),
            Err(e) => error!("animation task panicked: {e}"),
        }

        info!("byebye!");
    });
}
