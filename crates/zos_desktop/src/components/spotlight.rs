use super::*;
use crate::keyboard::{route_spotlight_key, SpotlightKey};

const FALLBACK_RESULT_ICON: &str = "📄";

#[component]
pub(super) fn SpotlightOverlay(
    services: ShellServices,
    state: RwSignal<SpotlightState>,
    on_action: Callback<SpotlightAction>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();
    let is_open = create_memo(move |_| state.with(|spotlight| spotlight.is_open));
    let results = create_memo(move |_| state.with(|spotlight| spotlight.results.clone()));

    create_effect(move |_| {
        if is_open.get() {
            request_animation_frame(move || {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
    });

    let confirm = move || {
        if let Some(action) = state.try_update(SpotlightState::confirm).flatten() {
            on_action.call(action);
        }
    };
    let close = move |_| state.update(SpotlightState::close);
    let on_input = move |ev: web_sys::Event| {
        let query = event_target_value(&ev);
        services.with_search(|search| state.update(|spotlight| spotlight.set_query(query, search)));
    };
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let Some(key) = route_spotlight_key(&KeyChord::from_event(&ev)) else {
            return;
        };
        ev.prevent_default();
        match key {
            SpotlightKey::Close => state.update(SpotlightState::close),
            SpotlightKey::Next => state.update(SpotlightState::select_next),
            SpotlightKey::Previous => state.update(SpotlightState::select_previous),
            SpotlightKey::Confirm => confirm(),
        }
    };

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <div class="zos-spotlight" role="dialog" aria-label="Spotlight Search">
                <div class="zos-spotlight-backdrop" on:click=close />
                <div class="zos-spotlight-panel">
                    <div class="zos-spotlight-input-row">
                        <span class="zos-spotlight-glyph" aria-hidden="true">"🔍"</span>
                        <input
                            node_ref=input_ref
                            type="text"
                            placeholder="Spotlight Search"
                            autofocus=true
                            prop:value=move || state.with(|spotlight| spotlight.query.clone())
                            on:input=on_input
                            on:keydown=on_keydown
                        />
                    </div>
                    <Show when=move || results.with(|results| !results.is_empty()) fallback=|| ()>
                        <ul class="zos-spotlight-results" role="listbox">
                            {move || {
                                results
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, result)| {
                                        let is_selected = move || {
                                            state.with(|spotlight| spotlight.selected == index)
                                        };
                                        let icon = result
                                            .icon
                                            .clone()
                                            .unwrap_or_else(|| FALLBACK_RESULT_ICON.to_string());
                                        view! {
                                            <li
                                                class=move || {
                                                    if is_selected() {
                                                        "zos-spotlight-result selected"
                                                    } else {
                                                        "zos-spotlight-result"
                                                    }
                                                }
                                                role="option"
                                                aria-selected=move || is_selected().to_string()
                                                data-testid=format!("spotlight-{}", result.id)
                                                on:mouseenter=move |_| state.update(|spotlight| spotlight.select(index))
                                                on:click=move |_| {
                                                    state.update(|spotlight| spotlight.select(index));
                                                    confirm();
                                                }
                                            >
                                                {app_icon(icon, result.title.clone())}
                                                <div class="zos-spotlight-text">
                                                    <div class="zos-spotlight-title">{result.title.clone()}</div>
                                                    {result
                                                        .subtitle
                                                        .clone()
                                                        .map(|subtitle| {
                                                            view! { <div class="zos-spotlight-subtitle">{subtitle}</div> }
                                                        })}
                                                </div>
                                                <span class="zos-spotlight-kind">{result.kind.label()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                    <Show when=move || state.with(SpotlightState::shows_empty_state) fallback=|| ()>
                        <div class="zos-spotlight-empty">
                            {move || state.with(|spotlight| format!("No results for \"{}\"", spotlight.query))}
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
