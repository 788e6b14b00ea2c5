// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted dropdown menu session against the in-memory host.
//!
//! This example walks a [`DropdownMenu`] through open, scroll, resize, and dismissal,
//! driving the host's event loop by hand:
//! - trigger clicks go to [`DropdownMenu::on_trigger_click`],
//! - deferred tasks are drained once per turn,
//! - document and window events are delivered only to registered listeners.
//!
//! Run:
//! - `cargo run -p understory_demos --example dropdown_menu`
//! - `RUST_LOG=understory_dropdown=trace cargo run -p understory_demos --example dropdown_menu`

use kurbo::{Point, Rect, Size, Vec2};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_dropdown::sim::SimHost;
use understory_dropdown::{Alignment, DropdownMenu, HostEvent, ListenerKind};

const TRIGGER: u32 = 1;
const PANEL: u32 = 2;

/// Deliver `event` to the menu if its panel is listening for it.
fn dispatch(host: &mut SimHost<u32>, menu: &mut DropdownMenu<u32>, event: HostEvent) {
    let owners = host.listeners(event.kind());
    if owners.contains(&PANEL) {
        let changes = menu.handle_event(host, event);
        info!(?event, ?changes, "delivered");
    } else {
        info!(?event, "no listener");
    }
}

/// End the current turn: run everything that was deferred.
fn next_turn(host: &mut SimHost<u32>, menu: &mut DropdownMenu<u32>) {
    for task in host.take_deferred() {
        let attached = menu.run_deferred(host, task);
        info!(?task, attached, "deferred task ran");
    }
}

fn report(host: &SimHost<u32>, menu: &DropdownMenu<u32>) {
    info!(
        open = menu.is_open(),
        position = ?host.position_of(PANEL),
        listeners = ?[ListenerKind::Click, ListenerKind::Resize, ListenerKind::Scroll]
            .map(|kind| (kind.event_name(), host.listener_count(kind, PANEL))),
        "state"
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut host = SimHost::new(Size::new(1000.0, 800.0));
    host.set_rect(
        TRIGGER,
        Rect::from_origin_size((100.0, 50.0), (200.0, 30.0)),
    );
    host.set_rect(PANEL, Rect::from_origin_size((0.0, 0.0), (80.0, 120.0)));

    let mut menu = DropdownMenu::new(TRIGGER, PANEL);
    menu.attach(&mut host);

    info!("click trigger");
    let changes = menu.on_trigger_click(&mut host);
    info!(?changes, "trigger handled");
    // The opening click reaches the document before the listener exists.
    dispatch(
        &mut host,
        &mut menu,
        HostEvent::Click {
            position: Point::new(150.0, 60.0),
        },
    );
    next_turn(&mut host, &mut menu);
    report(&host, &menu);

    info!("scroll by 20");
    host.scroll_by(Vec2::new(0.0, 20.0));
    dispatch(&mut host, &mut menu, HostEvent::Scroll);
    report(&host, &menu);

    info!("shrink viewport to 250");
    host.set_viewport(Size::new(250.0, 800.0));
    dispatch(&mut host, &mut menu, HostEvent::Resize);
    report(&host, &menu);

    info!("click outside");
    dispatch(
        &mut host,
        &mut menu,
        HostEvent::Click {
            position: Point::new(240.0, 700.0),
        },
    );
    report(&host, &menu);

    info!("center alignment, click trigger");
    menu.set_alignment(Alignment::Center);
    let changes = menu.on_trigger_click(&mut host);
    info!(?changes, "trigger handled");
    next_turn(&mut host, &mut menu);
    report(&host, &menu);

    info!("detach");
    menu.detach(&mut host);
    report(&host, &menu);
}
