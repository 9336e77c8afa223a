use std::io::Write;
use std::time::Duration;

use anyhow::Result;

use medilab_core::counter::{
    AnimationFrame, CounterAttributes, CounterRegistry, DisplayFormat, ElementId, FrameClock,
    ManualClock, SteadyClock,
};
use medilab_core::CounterConfig;

/// Play one counter, returns whether it reached its terminal frame
pub async fn run(
    config: CounterConfig,
    target: &str,
    format: Option<DisplayFormat>,
    instant: bool,
    json: bool,
) -> Result<bool> {
    let attrs = CounterAttributes {
        data_target: Some(target),
        data_format: format.map(|f| f.as_str()),
        text_content: None,
    };
    let frame_interval = Duration::from_millis(config.frame_interval_ms.max(1));
    let clock: Box<dyn FrameClock> = if instant {
        Box::new(ManualClock::new(frame_interval.as_secs_f64() * 1000.0))
    } else {
        Box::new(SteadyClock::new())
    };

    let mut registry = CounterRegistry::new(config);
    let id = ElementId::from("cli-counter");
    let Some(mut animation) = registry.on_visible(id.clone(), attrs, clock) else {
        anyhow::bail!("Counter {} was already started", id);
    };

    let mut completed = false;

    if instant {
        for frame in animation.by_ref() {
            completed = frame.is_terminal();
            print_frame(&frame, json, true)?;
        }
        return Ok(completed);
    }

    // Drive the animation like a display refresh callback would
    let mut ticker = tokio::time::interval(frame_interval);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut interrupted = false;

    loop {
        tokio::select! {
            _ = ticker.tick() => match animation.next() {
                Some(frame) => {
                    completed = frame.is_terminal();
                    print_frame(&frame, json, false)?;
                }
                None => break,
            },
            _ = &mut ctrl_c, if !interrupted => {
                interrupted = true;
                tracing::info!("Interrupted, cancelling counter");
                registry.on_removed(&id);
            }
        }
    }

    if !json {
        println!();
    }
    Ok(completed)
}

fn print_frame(frame: &AnimationFrame, json: bool, line_per_frame: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string(frame)?)?;
    } else if line_per_frame {
        writeln!(
            stdout,
            "{:>8.1}ms  {:>5.1}%  {}",
            frame.elapsed_ms,
            frame.progress * 100.0,
            frame.text
        )?;
    } else {
        // Redraw in place
        write!(stdout, "\r{:<24}", frame.text)?;
        stdout.flush()?;
    }
    Ok(())
}
