//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{host, model::DesktopState, reducer::RuntimeEffect};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(effects: RwSignal<Vec<RuntimeEffect>>, state: ReadSignal<DesktopState>) {
    // Clear the queue before running so effects that dispatch again enqueue a fresh batch.
    create_effect(move |_| {
        let queued = effects.get();
        if queued.is_empty() {
            return;
        }

        effects.set(Vec::new());

        for effect in queued {
            host::run_runtime_effect(state, effect);
        }
    });
}
