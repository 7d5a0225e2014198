use dioxus::prelude::*;
use store::models::{score_exam, ExamScore, EXAM_PASS_PERCENT};
use store::{Lesson, TrainingModule};

use crate::icons::{FaCirclePlay, FaClipboardCheck, FaPen};
use crate::markdown::render_markdown;
use crate::state::{Screen, SelectedLesson};
use crate::Icon;

#[component]
pub fn TrainingView(
    modules: Vec<TrainingModule>,
    elevated: bool,
    on_open_lesson: EventHandler<(TrainingModule, Lesson)>,
    on_open_exam: EventHandler<TrainingModule>,
    on_navigate: EventHandler<Screen>,
) -> Element {
    rsx! {
        div {
            class: "view-page",
            if elevated {
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_navigate.call(Screen::TrainingCurator),
                    Icon { icon: FaPen, width: 12, height: 12 }
                    " Curate academy"
                }
            }
            if modules.is_empty() {
                p { class: "view-muted", "No training modules yet." }
            }
            for module in modules.iter() {
                div {
                    key: "{module.id}",
                    class: "card",
                    h2 { class: "view-section-title", "{module.title}" }
                    p { class: "view-muted", "{module.description}" }
                    span { class: "view-muted", "{module.lessons.len()} lessons · {module.total_minutes()} min" }

                    div {
                        class: "list",
                        for lesson in module.lessons.iter() {
                            button {
                                key: "{lesson.id}",
                                class: "list-row",
                                onclick: {
                                    let module = module.clone();
                                    let lesson = lesson.clone();
                                    move |_| on_open_lesson.call((module.clone(), lesson.clone()))
                                },
                                Icon { icon: FaCirclePlay, width: 14, height: 14 }
                                span { class: "list-row-title", "{lesson.title}" }
                                span { class: "view-muted", "{lesson.duration_minutes} min" }
                            }
                        }
                    }

                    if module.has_exam() {
                        button {
                            class: "btn btn-primary",
                            onclick: {
                                let module = module.clone();
                                move |_| on_open_exam.call(module.clone())
                            },
                            Icon { icon: FaClipboardCheck, width: 14, height: 14 }
                            " Take the exam"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TrainingLessonView(selection: SelectedLesson, on_back: EventHandler<()>) -> Element {
    let body = render_markdown(&selection.lesson.content);

    rsx! {
        div {
            class: "view-page",
            p { class: "view-muted", "{selection.module_title}" }
            h1 { class: "view-title", "{selection.lesson.title}" }
            if let Some(ref video) = selection.lesson.video_url {
                a {
                    class: "btn btn-outline",
                    href: "{video}",
                    target: "_blank",
                    rel: "noopener",
                    Icon { icon: FaCirclePlay, width: 14, height: 14 }
                    " Watch the video"
                }
            }
            article {
                class: "lesson-body",
                dangerous_inner_html: "{body}",
            }
            button {
                class: "btn btn-outline",
                onclick: move |_| on_back.call(()),
                "Back to academy"
            }
        }
    }
}

/// Multiple-choice exam for one module.
#[component]
pub fn TrainingExamView(module: TrainingModule, on_back: EventHandler<()>) -> Element {
    let question_count = module.exam.len();
    let mut answers = use_signal(move || vec![None::<usize>; question_count]);
    let mut result = use_signal(|| Option::<ExamScore>::None);

    let questions = module.exam.clone();
    let submit = move |_| {
        let score = score_exam(&questions, &answers());
        tracing::info!("exam scored {}%", score.percent());
        result.set(Some(score));
    };

    let answered = answers().iter().filter(|a| a.is_some()).count();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{module.title}" }
            p { class: "view-muted", "Pass mark: {EXAM_PASS_PERCENT}%" }

            for (qi, question) in module.exam.iter().enumerate() {
                fieldset {
                    key: "{question.id}",
                    class: "card exam-question",
                    disabled: result().is_some(),
                    legend { "{qi + 1}. {question.question}" }
                    for (oi, option) in question.options.iter().enumerate() {
                        label {
                            key: "{oi}",
                            class: "exam-option",
                            input {
                                r#type: "radio",
                                name: "{question.id}",
                                checked: answers().get(qi).copied().flatten() == Some(oi),
                                onchange: move |_| {
                                    if let Some(slot) = answers.write().get_mut(qi) {
                                        *slot = Some(oi);
                                    }
                                },
                            }
                            span { "{option}" }
                        }
                    }
                }
            }

            {
                match result() {
                    Some(score) => rsx! {
                        div {
                            class: if score.passed() { "card exam-result exam-result--pass" } else { "card exam-result exam-result--fail" },
                            strong { "{score.correct} / {score.total} correct ({score.percent()}%)" }
                            p {
                                if score.passed() { "Passed. Well done!" } else { "Not yet. Review the lessons and try again." }
                            }
                            if !score.passed() {
                                button {
                                    class: "btn btn-outline",
                                    onclick: move |_| {
                                        answers.set(vec![None; question_count]);
                                        result.set(None);
                                    },
                                    "Try again"
                                }
                            }
                        }
                    },
                    None => rsx! {
                        button {
                            class: "btn btn-primary",
                            disabled: answered < question_count,
                            onclick: submit,
                            "Submit answers"
                        }
                    },
                }
            }

            button {
                class: "btn btn-outline",
                onclick: move |_| on_back.call(()),
                "Back to academy"
            }
        }
    }
}
