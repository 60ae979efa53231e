use std::time::Duration;

use super::*;
use crate::{
    boot::{BootPhase, BootSequence, BootSignal},
    model::BootConfig,
};

fn boot_phase_id(phase: BootPhase) -> &'static str {
    match phase {
        BootPhase::Logo => "logo",
        BootPhase::Loading => "loading",
        BootPhase::Complete => "complete",
    }
}

/// The bar stays up through the fade so it is seen reaching 100%.
fn shows_progress(phase: BootPhase) -> bool {
    phase != BootPhase::Logo
}

#[component]
pub(super) fn BootScreen(config: BootConfig, on_complete: Callback<()>) -> impl IntoView {
    let boot = create_rw_signal(BootSequence::new(config));
    let tick_ms = boot.with_untracked(BootSequence::tick_interval_ms);

    match set_interval_with_handle(
        move || {
            if boot.try_update(|boot| boot.tick(tick_ms)).flatten() == Some(BootSignal::Completed) {
                logging::log!("boot sequence complete");
                on_complete.call(());
            }
        },
        Duration::from_millis(tick_ms),
    ) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => {
            logging::warn!("boot timer unavailable, skipping boot sequence: {err:?}");
            on_complete.call(());
        }
    }

    let phase = move || boot.with(BootSequence::phase);

    view! {
        <div class="zos-boot" data-phase=move || boot_phase_id(phase())>
            <div class=move || {
                if phase() == BootPhase::Logo { "zos-boot-logo hidden" } else { "zos-boot-logo" }
            }>"◆"</div>
            <Show when=move || shows_progress(phase()) fallback=|| ()>
                <div class="zos-boot-progress">
                    <div
                        class="zos-boot-progress-fill"
                        style=move || format!("width:{}%;", boot.with(BootSequence::progress))
                    />
                </div>
            </Show>
            <Show when=move || phase() == BootPhase::Complete fallback=|| ()>
                <div class="zos-boot-fade" />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn phase_ids_match_stylesheet_hooks() {
        assert_eq!(boot_phase_id(BootPhase::Logo), "logo");
        assert_eq!(boot_phase_id(BootPhase::Complete), "complete");
    }

    #[test]
    fn progress_bar_is_still_drawn_when_boot_completes() {
        let mut boot = BootSequence::new(BootConfig::default());
        assert!(!shows_progress(boot.phase()));

        let tick_ms = boot.tick_interval_ms();
        while !boot.is_finished() {
            boot.tick(tick_ms);
            if boot.phase() == BootPhase::Loading {
                assert!(shows_progress(boot.phase()));
            }
        }

        assert_eq!(boot.phase(), BootPhase::Complete);
        assert_eq!(boot.progress(), 100);
        assert!(shows_progress(boot.phase()));
    }
}
