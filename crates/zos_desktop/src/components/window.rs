use zos_app_contract::AppMountContext;

use super::*;
use crate::{
    host::window_dom_id,
    model::{WindowId, WindowRecord},
};

fn window_frame_style(win: &WindowRecord) -> String {
    let display = if win.is_minimized { "display:none;" } else { "" };
    if win.is_maximized {
        format!(
            "left:0;top:{MENU_BAR_HEIGHT_PX}px;width:100%;height:calc(100% - {MENU_BAR_HEIGHT_PX}px);z-index:{};{display}",
            win.z_index
        )
    } else {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};{display}",
            win.position.x, win.position.y, win.size.width, win.size.height, win.z_index
        )
    }
}

/// Mounts the window's content once; minimizing hides the frame without unmounting the app.
fn mount_window_content(
    wm: WindowManagerHandle,
    services: ShellServices,
    win: &WindowRecord,
) -> Option<View> {
    if win.app_id.as_str() == SETTINGS_APP_ID {
        return Some(view! { <DesktopSettingsPanel wm=wm /> }.into_view());
    }

    let module = services.with_registry(|registry| registry.module(&win.app_id))?;
    let window_id = store_value(win.id.clone());
    let app_id = store_value(win.app_id.clone());
    Some(module.mount(AppMountContext {
        app_id: win.app_id.clone(),
        window_id: win.id.to_string(),
        on_close: Callback::new(move |_| wm.close(window_id.get_value())),
        on_badge: Callback::new(move |count| services.set_badge(app_id.get_value(), count)),
    }))
}

#[component]
pub(super) fn DesktopWindow(
    wm: WindowManagerHandle,
    services: ShellServices,
    window_id: WindowId,
) -> impl IntoView {
    let window = create_memo({
        let window_id = window_id.clone();
        move |_| wm.state().with(|desktop| desktop.window(&window_id).cloned())
    });

    // Windows of apps without a renderer stay in the collection but are not drawn.
    let Some(content) = window
        .get_untracked()
        .and_then(|win| mount_window_content(wm, services, &win))
    else {
        return ().into_view();
    };

    let dom_id = window_dom_id(&window_id);
    let test_id = window
        .get_untracked()
        .map(|win| format!("window-{}", win.app_id))
        .unwrap_or_default();
    let window_id = store_value(window_id);

    let focus = move |_| {
        let should_focus = window.with(|win| win.as_ref().is_some_and(|w| !w.is_focused));
        if should_focus {
            wm.focus(window_id.get_value());
        }
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        wm.close(window_id.get_value());
    };
    let minimize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        wm.minimize(window_id.get_value());
    };
    let toggle_maximize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        wm.maximize(window_id.get_value());
    };

    let frame_class = move || {
        window.with(|win| {
            let Some(win) = win else {
                return "zos-window".to_string();
            };
            format!(
                "zos-window{}{}",
                if win.is_focused { " focused" } else { "" },
                if win.is_maximized { " maximized" } else { "" }
            )
        })
    };
    let frame_style = move || {
        window.with(|win| win.as_ref().map(window_frame_style).unwrap_or_default())
    };
    let title = move || {
        window.with(|win| win.as_ref().map(|w| w.title.clone()).unwrap_or_default())
    };

    view! {
        <section
            id=dom_id
            class=frame_class
            style=frame_style
            tabindex="-1"
            role="dialog"
            aria-label=title
            data-testid=test_id
            on:mousedown=focus
        >
            <header class="zos-titlebar" on:dblclick=toggle_maximize>
                <div class="zos-traffic-lights">
                    <button
                        class="zos-traffic-light close"
                        aria-label="Close window"
                        data-testid="close-button"
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=close
                    />
                    <button
                        class="zos-traffic-light minimize"
                        aria-label="Minimize window"
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=minimize
                    />
                    <button
                        class="zos-traffic-light zoom"
                        aria-label="Zoom window"
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=toggle_maximize
                    />
                </div>
                <span class="zos-titlebar-title">{title}</span>
            </header>
            <div class="zos-window-content">{content}</div>
        </section>
    }
    .into_view()
}
