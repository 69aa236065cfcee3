use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::Clock;
use quiz_core::model::QuestionSet;
use quiz_core::time::fixed_clock;
use services::bundled_question_set;

use crate::context::{SnapshotSlot, UiApp, build_app_context};
use crate::views::quiz::use_quiz_controller;
use crate::views::{GreetingView, QuizView};
use crate::vm::QuizIntent;

struct TestApp {
    questions: Arc<QuestionSet>,
}

impl UiApp for TestApp {
    fn question_set(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Greeting,
    Quiz,
    /// Mounts only the quiz controller and exposes its dispatcher.
    QuizIntents,
}

#[derive(Clone, Default)]
struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

impl HarnessHandles {
    fn dispatch(&self) -> Callback<QuizIntent> {
        self.dispatch
            .borrow()
            .clone()
            .expect("dispatch registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    slot: SnapshotSlot,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let slot = props.slot.clone();
    use_context_provider(|| build_app_context(&app).with_snapshot_slot(slot));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Greeting => rsx! { GreetingView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::QuizIntents => rsx! { QuizIntentHarness {} },
    }
}

#[component]
fn QuizIntentHarness() -> Element {
    let handles = use_context::<HarnessHandles>();
    let controller = use_quiz_controller();
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.dispatch.borrow_mut() = Some(controller.dispatch);
    }
    rsx! { div {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub slot: SnapshotSlot,
    pub questions: Arc<QuestionSet>,
    handles: HarnessHandles,
}

impl ViewHarness {
    /// Sends one intent through the captured dispatcher and settles the DOM.
    pub fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_slot(view, SnapshotSlot::default())
}

pub fn setup_view_harness_with_slot(view: ViewKind, slot: SnapshotSlot) -> ViewHarness {
    let questions = Arc::new(bundled_question_set().expect("bundled question set"));
    let handles = HarnessHandles::default();
    let app = Arc::new(TestApp {
        questions: Arc::clone(&questions),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            slot: slot.clone(),
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        slot,
        questions,
        handles,
    }
}
