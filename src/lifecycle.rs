//! Main window lifecycle: hide-on-close, quit arbitration and bounds persistence.
//!
//! Tauri callbacks are translated into [`LifecycleEvent`]s; the controller
//! answers each with a [`Transition`] carrying the new [`WindowState`] and
//! the window effects the caller must execute.

use serde::Serialize;

use crate::{
    bounds_store::BoundsStore,
    kv_store::KeyValueStore,
    platform_policy::PlatformPolicy,
    window_bounds::{WindowBounds, WindowGeometry},
};

/// Set once a real quit is under way; never lowered.
#[derive(Debug, Default)]
pub(crate) struct QuitFlag {
    raised: bool,
}

impl QuitFlag {
    /// Returns `true` only for the call that raised the flag.
    pub(crate) fn raise(&mut self) -> bool {
        let newly_raised = !self.raised;
        self.raised = true;
        newly_raised
    }

    pub(crate) fn is_raised(&self) -> bool {
        self.raised
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum WindowState {
    Absent,
    Visible,
    Hidden,
    Destroyed,
}

impl WindowState {
    pub(crate) fn is_alive(self) -> bool {
        matches!(self, Self::Visible | Self::Hidden)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleEvent {
    Create,
    Moved(WindowBounds),
    Resized(WindowBounds),
    CloseRequested,
    Hide,
    Activate,
    QuitRequested,
    AllWindowsClosed,
    Teardown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleEffect {
    CreateWindow(WindowGeometry),
    ShowWindow,
    HideWindow,
    /// Veto the pending close request.
    CancelClose,
    /// The window is going away; drop anything holding on to it.
    ReleaseWindow,
    /// Veto the pending process exit.
    StayResident,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transition {
    pub(crate) state: WindowState,
    pub(crate) effects: Vec<LifecycleEffect>,
}

impl Transition {
    fn unchanged(state: WindowState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub(crate) fn contains(&self, effect: LifecycleEffect) -> bool {
        self.effects.contains(&effect)
    }
}

#[derive(Debug)]
pub(crate) struct LifecycleController<S> {
    window: WindowState,
    quit_flag: QuitFlag,
    policy: PlatformPolicy,
    bounds: BoundsStore<S>,
    last_bounds: Option<WindowBounds>,
}

impl<S: KeyValueStore> LifecycleController<S> {
    pub(crate) fn new(policy: PlatformPolicy, bounds: BoundsStore<S>) -> Self {
        Self {
            window: WindowState::Absent,
            quit_flag: QuitFlag::default(),
            policy,
            bounds,
            last_bounds: None,
        }
    }

    pub(crate) fn window_state(&self) -> WindowState {
        self.window
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.quit_flag.is_raised()
    }

    pub(crate) fn last_bounds(&self) -> Option<WindowBounds> {
        self.last_bounds
    }

    #[cfg(test)]
    pub(crate) fn bounds_store(&self) -> &BoundsStore<S> {
        &self.bounds
    }

    pub(crate) fn handle<F>(&mut self, event: LifecycleEvent, log: F) -> Transition
    where
        F: Fn(&str),
    {
        let transition = match event {
            LifecycleEvent::Create => self.on_create(&log),
            LifecycleEvent::Moved(bounds) | LifecycleEvent::Resized(bounds) => {
                self.on_bounds_changed(bounds, &log)
            }
            LifecycleEvent::CloseRequested => self.on_close_requested(),
            LifecycleEvent::Hide => self.on_hide(),
            LifecycleEvent::Activate => self.on_activate(&log),
            LifecycleEvent::QuitRequested => {
                if self.quit_flag.raise() {
                    log("quit requested; main window will close for real");
                }
                Transition::unchanged(self.window)
            }
            LifecycleEvent::AllWindowsClosed => self.on_all_windows_closed(&log),
            LifecycleEvent::Teardown => self.on_teardown(),
        };

        self.window = transition.state;
        transition
    }

    fn on_create(&mut self, log: &dyn Fn(&str)) -> Transition {
        if self.window.is_alive() {
            log("main window already exists; create skipped");
            return Transition::unchanged(self.window);
        }
        if self.quit_flag.is_raised() {
            log("quit in progress; create skipped");
            return Transition::unchanged(self.window);
        }

        let bounds = self.bounds.load(log);
        self.last_bounds = bounds;
        Transition {
            state: WindowState::Visible,
            effects: vec![LifecycleEffect::CreateWindow(WindowGeometry::from_bounds(
                bounds,
            ))],
        }
    }

    fn on_bounds_changed(&mut self, bounds: WindowBounds, log: &dyn Fn(&str)) -> Transition {
        self.last_bounds = Some(bounds);
        if let Err(error) = self.bounds.save(&bounds) {
            log(&format!("failed to persist window bounds: {error}"));
        }
        Transition::unchanged(self.window)
    }

    fn on_close_requested(&mut self) -> Transition {
        if !self.window.is_alive() {
            return Transition::unchanged(self.window);
        }

        if self.quit_flag.is_raised() {
            Transition {
                state: WindowState::Destroyed,
                effects: vec![LifecycleEffect::ReleaseWindow],
            }
        } else {
            Transition {
                state: WindowState::Hidden,
                effects: vec![LifecycleEffect::CancelClose, LifecycleEffect::HideWindow],
            }
        }
    }

    fn on_hide(&mut self) -> Transition {
        match self.window {
            WindowState::Visible | WindowState::Hidden => Transition {
                state: WindowState::Hidden,
                effects: vec![LifecycleEffect::HideWindow],
            },
            state => Transition::unchanged(state),
        }
    }

    fn on_activate(&mut self, log: &dyn Fn(&str)) -> Transition {
        match self.window {
            WindowState::Visible | WindowState::Hidden => Transition {
                state: WindowState::Visible,
                effects: vec![LifecycleEffect::ShowWindow],
            },
            state => {
                log(&format!("activate ignored: main window is {state:?}"));
                Transition::unchanged(state)
            }
        }
    }

    fn on_all_windows_closed(&mut self, log: &dyn Fn(&str)) -> Transition {
        if self.policy.stay_resident_on_all_closed && !self.quit_flag.is_raised() {
            log("all windows closed; staying resident");
            return Transition {
                state: self.window,
                effects: vec![LifecycleEffect::StayResident],
            };
        }

        self.quit_flag.raise();
        log("all windows closed; exiting");
        Transition::unchanged(self.window)
    }

    fn on_teardown(&mut self) -> Transition {
        self.quit_flag.raise();
        if self.window.is_alive() {
            Transition {
                state: WindowState::Destroyed,
                effects: vec![LifecycleEffect::ReleaseWindow],
            }
        } else {
            Transition::unchanged(self.window)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{kv_store::MemoryStore, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

    fn controller(stay_resident: bool) -> LifecycleController<MemoryStore> {
        LifecycleController::new(
            PlatformPolicy {
                stay_resident_on_all_closed: stay_resident,
            },
            BoundsStore::new(MemoryStore::default()),
        )
    }

    fn created(stay_resident: bool) -> LifecycleController<MemoryStore> {
        let mut controller = controller(stay_resident);
        controller.handle(LifecycleEvent::Create, |_| {});
        controller
    }

    fn bounds(x: i32, y: i32, width: u32, height: u32) -> WindowBounds {
        WindowBounds {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn create_without_persisted_bounds_uses_default_geometry() {
        let mut controller = controller(false);
        let transition = controller.handle(LifecycleEvent::Create, |_| {});

        assert_eq!(transition.state, WindowState::Visible);
        let [LifecycleEffect::CreateWindow(geometry)] = transition.effects.as_slice() else {
            panic!("expected a single CreateWindow effect, got {:?}", transition.effects);
        };
        assert_eq!(geometry.width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(geometry.height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(geometry.position, None);
    }

    #[test]
    fn create_restores_persisted_bounds_exactly() {
        let mut store = BoundsStore::new(MemoryStore::default());
        store
            .save(&bounds(10, 20, 800, 500))
            .expect("seed persisted bounds");
        let mut controller = LifecycleController::new(PlatformPolicy::for_os("linux"), store);

        let transition = controller.handle(LifecycleEvent::Create, |_| {});
        assert_eq!(
            transition.effects,
            vec![LifecycleEffect::CreateWindow(WindowGeometry {
                width: 800,
                height: 500,
                position: Some((10, 20)),
                min_width: crate::MIN_WINDOW_WIDTH,
            })]
        );
        assert_eq!(controller.last_bounds(), Some(bounds(10, 20, 800, 500)));
    }

    #[test]
    fn create_is_refused_while_a_window_exists() {
        let mut controller = created(false);
        controller.handle(LifecycleEvent::CloseRequested, |_| {});

        let transition = controller.handle(LifecycleEvent::Create, |_| {});
        assert!(transition.effects.is_empty());
        assert_eq!(transition.state, WindowState::Hidden);
    }

    #[test]
    fn last_move_or_resize_wins() {
        let mut controller = created(false);
        let events = [
            LifecycleEvent::Moved(bounds(1, 1, 900, 600)),
            LifecycleEvent::Resized(bounds(1, 1, 1000, 700)),
            LifecycleEvent::Moved(bounds(40, 50, 1000, 700)),
            LifecycleEvent::Resized(bounds(40, 50, 1200, 640)),
        ];
        for event in events {
            let transition = controller.handle(event, |_| {});
            assert!(transition.effects.is_empty());
        }

        assert_eq!(controller.bounds_store().store().writes, events.len());
        assert_eq!(
            controller.bounds_store().load(|_| {}),
            Some(bounds(40, 50, 1200, 640))
        );
    }

    #[test]
    fn failed_bounds_write_is_logged_and_state_kept() {
        let mut controller = LifecycleController::new(
            PlatformPolicy::for_os("linux"),
            BoundsStore::new(MemoryStore {
                fail_writes: true,
                ..MemoryStore::default()
            }),
        );
        controller.handle(LifecycleEvent::Create, |_| {});

        let logs = RefCell::new(Vec::new());
        let transition = controller.handle(LifecycleEvent::Moved(bounds(3, 4, 900, 600)), |line| {
            logs.borrow_mut().push(line.to_string())
        });
        assert_eq!(transition.state, WindowState::Visible);
        assert!(logs.borrow()[0].starts_with("failed to persist window bounds"));
    }

    #[test]
    fn close_without_quit_hides_and_keeps_window_showable() {
        let mut controller = created(false);

        let transition = controller.handle(LifecycleEvent::CloseRequested, |_| {});
        assert_eq!(transition.state, WindowState::Hidden);
        assert!(transition.contains(LifecycleEffect::CancelClose));
        assert!(transition.contains(LifecycleEffect::HideWindow));
        assert!(!transition.contains(LifecycleEffect::ReleaseWindow));

        let transition = controller.handle(LifecycleEvent::Activate, |_| {});
        assert_eq!(transition.state, WindowState::Visible);
        assert_eq!(transition.effects, vec![LifecycleEffect::ShowWindow]);
    }

    #[test]
    fn close_after_quit_request_destroys_window() {
        let mut controller = created(false);
        controller.handle(LifecycleEvent::QuitRequested, |_| {});

        let transition = controller.handle(LifecycleEvent::CloseRequested, |_| {});
        assert_eq!(transition.state, WindowState::Destroyed);
        assert_eq!(transition.effects, vec![LifecycleEffect::ReleaseWindow]);
        assert!(!controller.window_state().is_alive());
    }

    #[test]
    fn activate_before_create_is_ignored() {
        let mut controller = controller(true);
        let transition = controller.handle(LifecycleEvent::Activate, |_| {});
        assert_eq!(transition.state, WindowState::Absent);
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn hide_only_applies_to_live_window() {
        let mut controller = controller(false);
        assert!(controller
            .handle(LifecycleEvent::Hide, |_| {})
            .effects
            .is_empty());

        controller.handle(LifecycleEvent::Create, |_| {});
        let transition = controller.handle(LifecycleEvent::Hide, |_| {});
        assert_eq!(transition.state, WindowState::Hidden);
        assert_eq!(transition.effects, vec![LifecycleEffect::HideWindow]);
    }

    #[test]
    fn all_windows_closed_stays_resident_on_resident_platform() {
        let mut controller = created(true);
        let transition = controller.handle(LifecycleEvent::AllWindowsClosed, |_| {});
        assert_eq!(transition.effects, vec![LifecycleEffect::StayResident]);
        assert!(!controller.is_quitting());
    }

    #[test]
    fn all_windows_closed_exits_elsewhere() {
        let mut controller = created(false);
        let transition = controller.handle(LifecycleEvent::AllWindowsClosed, |_| {});
        assert!(!transition.contains(LifecycleEffect::StayResident));
        assert!(controller.is_quitting());
    }

    #[test]
    fn all_windows_closed_never_blocks_a_requested_quit() {
        let mut controller = created(true);
        controller.handle(LifecycleEvent::QuitRequested, |_| {});
        controller.handle(LifecycleEvent::CloseRequested, |_| {});

        let transition = controller.handle(LifecycleEvent::AllWindowsClosed, |_| {});
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn quit_flag_is_monotonic_across_any_event_sequence() {
        let mut controller = created(true);
        controller.handle(LifecycleEvent::QuitRequested, |_| {});

        let events = [
            LifecycleEvent::Activate,
            LifecycleEvent::Hide,
            LifecycleEvent::Moved(bounds(0, 0, 900, 600)),
            LifecycleEvent::QuitRequested,
            LifecycleEvent::CloseRequested,
            LifecycleEvent::Create,
            LifecycleEvent::AllWindowsClosed,
            LifecycleEvent::Teardown,
        ];
        for event in events {
            controller.handle(event, |_| {});
            assert!(controller.is_quitting(), "quit flag lowered after {event:?}");
        }
    }

    #[test]
    fn quit_flag_raise_reports_first_raise_only() {
        let mut flag = QuitFlag::default();
        assert!(!flag.is_raised());
        assert!(flag.raise());
        assert!(!flag.raise());
        assert!(flag.is_raised());
    }

    #[test]
    fn teardown_releases_live_window() {
        let mut controller = created(true);
        controller.handle(LifecycleEvent::CloseRequested, |_| {});

        let transition = controller.handle(LifecycleEvent::Teardown, |_| {});
        assert_eq!(transition.state, WindowState::Destroyed);
        assert_eq!(transition.effects, vec![LifecycleEffect::ReleaseWindow]);

        let transition = controller.handle(LifecycleEvent::Teardown, |_| {});
        assert!(transition.effects.is_empty());
    }
}
