//! Renderers for the bundled demo apps.
//!
//! Catalog entries without a renderer here still appear in the dock and spotlight; the window
//! manager simply has nothing to draw for them.

mod calculator;

use std::time::Duration;

use leptos::*;
use zos_app_contract::{AppModule, AppMountContext, AppMountFn, ApplicationId};
use zos_desktop::clock::ClockSnapshot;

use calculator::{Calculator, Key, Operator};

/// Renderer bound to `app_id`, if the site ships one.
pub fn module_for(app_id: &ApplicationId) -> Option<AppModule> {
    let mount: AppMountFn = match app_id.as_str() {
        "ai.hanzo.notes" => mount_notes,
        "ai.hanzo.calculator" => mount_calculator,
        "ai.hanzo.clock" => mount_clock,
        "ai.hanzo.about" => mount_about,
        _ => return None,
    };
    Some(AppModule::new(mount))
}

fn mount_notes(ctx: AppMountContext) -> View {
    view! { <NotesApp ctx /> }.into_view()
}

fn mount_calculator(_ctx: AppMountContext) -> View {
    view! { <CalculatorApp /> }.into_view()
}

fn mount_clock(_ctx: AppMountContext) -> View {
    view! { <ClockApp /> }.into_view()
}

fn mount_about(ctx: AppMountContext) -> View {
    view! { <AboutApp ctx /> }.into_view()
}

#[component]
fn NotesApp(ctx: AppMountContext) -> impl IntoView {
    let notes = create_rw_signal(Vec::<String>::new());
    let draft = create_rw_signal(String::new());

    let badge_ctx = ctx.clone();
    create_effect(move |_| {
        let count = notes.with(Vec::len);
        badge_ctx.set_badge(u32::try_from(count).unwrap_or(u32::MAX));
    });
    on_cleanup(move || ctx.set_badge(0));

    let add_note = move || {
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        notes.update(|notes| notes.push(text));
        draft.set(String::new());
    };

    view! {
        <div class="app-notes">
            <form
                class="app-notes-compose"
                on:submit=move |ev| {
                    ev.prevent_default();
                    add_note();
                }
            >
                <input
                    type="text"
                    placeholder="New note"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>
            <ul class="app-notes-list">
                {move || {
                    notes
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, note)| {
                            view! {
                                <li>
                                    <span>{note}</span>
                                    <button
                                        aria-label="Delete note"
                                        on:click=move |_| {
                                            notes.update(|notes| {
                                                if index < notes.len() {
                                                    notes.remove(index);
                                                }
                                            })
                                        }
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

const CALCULATOR_ROWS: [[Key; 4]; 4] = [
    [
        Key::Digit('7'),
        Key::Digit('8'),
        Key::Digit('9'),
        Key::Operator(Operator::Divide),
    ],
    [
        Key::Digit('4'),
        Key::Digit('5'),
        Key::Digit('6'),
        Key::Operator(Operator::Multiply),
    ],
    [
        Key::Digit('1'),
        Key::Digit('2'),
        Key::Digit('3'),
        Key::Operator(Operator::Subtract),
    ],
    [
        Key::Digit('0'),
        Key::Decimal,
        Key::Equals,
        Key::Operator(Operator::Add),
    ],
];

fn key_label(key: Key) -> String {
    match key {
        Key::Digit(digit) => digit.to_string(),
        Key::Decimal => ".".to_string(),
        Key::Operator(op) => op.symbol().to_string(),
        Key::Equals => "=".to_string(),
        Key::Clear => "C".to_string(),
    }
}

#[component]
fn CalculatorApp() -> impl IntoView {
    let calc = create_rw_signal(Calculator::default());
    let press = move |key: Key| calc.update(|calc| calc.press(key));

    view! {
        <div class="app-calculator">
            <div class="app-calculator-display">
                <span class="app-calculator-pending">
                    {move || calc.with(|calc| calc.pending_symbol().unwrap_or_default())}
                </span>
                <span class="app-calculator-value">{move || calc.with(Calculator::display)}</span>
            </div>
            <button class="app-calculator-clear" on:click=move |_| press(Key::Clear)>
                {key_label(Key::Clear)}
            </button>
            <div class="app-calculator-keys">
                {CALCULATOR_ROWS
                    .iter()
                    .flatten()
                    .map(|&key| {
                        view! {
                            <button on:click=move |_| press(key)>{key_label(key)}</button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ClockApp() -> impl IntoView {
    let now = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) =
        set_interval_with_handle(move || now.set(ClockSnapshot::now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="app-clock">
            <div class="app-clock-time">{move || now.with(ClockSnapshot::twenty_four_hour_label)}</div>
            <div class="app-clock-date">{move || now.with(ClockSnapshot::long_date_label)}</div>
        </div>
    }
}

#[component]
fn AboutApp(ctx: AppMountContext) -> impl IntoView {
    view! {
        <div class="app-about">
            <div class="app-about-logo">"zOS"</div>
            <p>{format!("Version {}", env!("CARGO_PKG_VERSION"))}</p>
            <p>"A desktop environment running in your browser, built with Leptos."</p>
            <button on:click=move |_| ctx.close()>"OK"</button>
        </div>
    }
}
