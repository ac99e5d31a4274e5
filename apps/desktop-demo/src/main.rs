use anyhow::Context;
use composelab_animation::{AnimationScheduler, AnimationSpec};
use composelab_demo::{
    run_until_idle, DemoConfig, FrameClock, ScrollAction, TutorialScreen, TutorialState,
};
use composelab_ui::{measure_layout, LayoutTree, Size, UiNode, UiTreeBuilder};
use log::{debug, info};

/// Upper bound on the frames one scroll animation may take.
const MAX_FRAMES: usize = 600;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = DemoConfig::from_env().context("invalid demo configuration")?;
    info!(
        "composelab demo: {} grid rows, {}x{} window",
        config.rows, config.width, config.height
    );
    let window = Size::new(config.width, config.height);

    let state = TutorialState::new();
    let mut ui = UiTreeBuilder::new();
    let screen = TutorialScreen(&mut ui, &state, config.rows)
        .context("failed to build the tutorial screen")?;
    info!("built {} nodes", ui.nodes_built());

    let tree = measure(&screen, window)?;
    info!("layout:\n{}", tree.dump());
    info!(
        "topic grid scrolls horizontally up to {}px",
        state.grid_scroll.max_value()
    );
    info!("visible items before scrolling: {:?}", state.visible_window());

    let scheduler = AnimationScheduler::new();
    state.perform(&scheduler, ScrollAction::ToBottom, AnimationSpec::default());
    let mut clock = FrameClock::realtime();
    let frames = run_until_idle(&scheduler, &mut clock, MAX_FRAMES, |now| {
        measure(&screen, window)?;
        debug!("frame at {now}ns: window {:?}", state.visible_window());
        Ok(())
    })?;

    info!(
        "visible items after {} frames: {:?}",
        frames,
        state.visible_window()
    );
    Ok(())
}

fn measure(screen: &UiNode, window: Size) -> anyhow::Result<LayoutTree> {
    measure_layout(screen, window).context("layout pass failed")
}
