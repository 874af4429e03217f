use dioxus::prelude::*;

use crate::hooks::{use_todos, PollState, UseTodos};
use crate::shared::types::Todo;
use crate::utils::todos::{partition_todos, TodoPartition};

const CHECK_ICON: &str = "M5 13l4 4L19 7";
const TRASH_ICON: &str = "M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16";
const CLIPBOARD_ICON: &str = "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2";
const CHEVRON_ICON: &str = "M9 5l7 7-7 7";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoPanel {
    Loading,
    Failed,
    Ready,
}

impl TodoPanel {
    pub fn from_poll(state: &PollState<Vec<Todo>>) -> Self {
        if state.loading {
            Self::Loading
        } else if state.error.is_some() {
            Self::Failed
        } else {
            Self::Ready
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn TodoList() -> Element {
    let todos = use_todos();
    let show_completed = use_signal(|| false);

    let toggle = move |(id, completed): (i64, bool)| {
        spawn(async move {
            todos.toggle_complete(id, completed).await;
        });
    };
    let remove = move |id: i64| {
        spawn(async move {
            todos.delete_todo(id).await;
        });
    };

    match TodoPanel::from_poll(&todos.state()) {
        TodoPanel::Loading => rsx! {
            TodoFrame {
                div { class: "space-y-3",
                    for i in 0..3 {
                        div { key: "{i}", class: "h-14 bg-slate-800 rounded-lg animate-pulse" }
                    }
                }
            }
        },
        TodoPanel::Failed => rsx! {
            TodoFrame {
                div { class: "text-red-400 text-center py-8", "Failed to load todos. Is the backend running?" }
            }
        },
        TodoPanel::Ready => rsx! {
            TodoBody {
                parts: partition_todos(&todos.todos()),
                show_completed,
                on_toggle: toggle,
                on_delete: remove,
                AddTodoForm { todos }
            }
        },
    }
}

/// Loaded list: header count, the add form slot, pending rows and the
/// collapsible completed section.
#[allow(non_snake_case)]
#[component]
pub fn TodoBody(
    parts: TodoPartition,
    mut show_completed: Signal<bool>,
    on_toggle: EventHandler<(i64, bool)>,
    on_delete: EventHandler<i64>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "bg-slate-900 rounded-xl p-6 h-full flex flex-col",
            div { class: "flex items-center justify-between mb-6",
                h2 { class: "text-xl font-semibold text-white", "Todo List" }
                span { class: "text-sm text-slate-400", "{parts.pending_label()}" }
            }

            {children}

            div { class: "flex-1 overflow-y-auto mt-4 pr-2 -mr-2",
                if parts.is_empty() {
                    div { class: "text-center py-12 text-slate-400",
                        svg { class: "w-12 h-12 mx-auto mb-4 text-slate-600", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                            path { stroke_linecap: "round", stroke_linejoin: "round", stroke_width: "2", d: CLIPBOARD_ICON }
                        }
                        p { "No todos yet" }
                        p { class: "text-sm mt-1", "Add one above or via Telegram!" }
                    }
                } else {
                    div { class: "space-y-2",
                        for todo in parts.pending.iter().cloned() {
                            TodoItem { key: "{todo.id}", todo: todo.clone(), on_toggle, on_delete }
                        }
                    }
                    if !parts.completed.is_empty() {
                        div { class: "mt-6",
                            button { class: "flex items-center gap-2 text-sm text-slate-400 hover:text-slate-300 transition-colors",
                                onclick: move |_| show_completed.toggle(),
                                svg {
                                    class: if show_completed() { "w-4 h-4 transition-transform rotate-90" } else { "w-4 h-4 transition-transform" },
                                    fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                                    path { stroke_linecap: "round", stroke_linejoin: "round", stroke_width: "2", d: CHEVRON_ICON }
                                }
                                "{parts.completed_label()}"
                            }
                            if show_completed() {
                                div { class: "space-y-2 mt-3",
                                    for todo in parts.completed.iter().cloned() {
                                        TodoItem { key: "{todo.id}", todo: todo.clone(), on_toggle, on_delete }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn TodoFrame(children: Element) -> Element {
    rsx! {
        div { class: "bg-slate-900 rounded-xl p-6 h-full",
            div { class: "flex items-center justify-between mb-6",
                h2 { class: "text-xl font-semibold text-white", "Todo List" }
            }
            {children}
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn TodoItem(todo: Todo, on_toggle: EventHandler<(i64, bool)>, on_delete: EventHandler<i64>) -> Element {
    let mut deleting = use_signal(|| false);
    let id = todo.id;
    let completed = todo.completed;

    let row = if completed {
        "bg-slate-800/50 border-slate-700/50"
    } else {
        "bg-slate-800 border-slate-700 hover:border-slate-600"
    };
    let dim = if deleting() { "opacity-50" } else { "" };
    let check = if completed {
        "bg-green-600 border-green-600"
    } else {
        "border-slate-500 hover:border-green-500"
    };
    let title_class = if completed {
        "text-slate-500 line-through"
    } else {
        "text-white"
    };

    rsx! {
        div { class: "group flex items-center gap-3 p-3 rounded-lg border transition-all {row} {dim}",
            button { class: "w-5 h-5 rounded border-2 flex items-center justify-center transition-all shrink-0 {check}",
                aria_label: if completed { "Mark incomplete" } else { "Mark complete" },
                onclick: move |_| on_toggle.call((id, completed)),
                if completed {
                    svg { class: "w-3 h-3 text-white", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                        path { stroke_linecap: "round", stroke_linejoin: "round", stroke_width: "3", d: CHECK_ICON }
                    }
                }
            }
            div { class: "flex-1 min-w-0",
                p { class: "truncate {title_class}", "{todo.title}" }
                p { class: "text-xs text-slate-500 mt-1", "Added by {todo.created_by}" }
            }
            button { class: "opacity-0 group-hover:opacity-100 p-1 text-slate-500 hover:text-red-400 transition-all",
                aria_label: "Delete todo",
                onclick: move |_| {
                    deleting.set(true);
                    on_delete.call(id);
                },
                svg { class: "w-5 h-5", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                    path { stroke_linecap: "round", stroke_linejoin: "round", stroke_width: "2", d: TRASH_ICON }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn AddTodoForm(todos: UseTodos) -> Element {
    let mut title = use_signal(String::new);
    let mut adding = use_signal(|| false);
    let blank = title.read().trim().is_empty();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let trimmed = title.read().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        adding.set(true);
        spawn(async move {
            if todos.create_todo(&trimmed).await {
                title.set(String::new());
            }
            adding.set(false);
        });
    };

    rsx! {
        form { class: "flex gap-2", onsubmit: submit,
            input { class: "flex-1 px-4 py-2 bg-slate-800 border border-slate-700 rounded-lg text-white placeholder-slate-500 focus:outline-none focus:border-blue-500 transition-colors",
                r#type: "text",
                placeholder: "Add a new todo...",
                value: "{title}",
                disabled: adding(),
                oninput: move |evt| title.set(evt.value()),
            }
            button { class: "px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-slate-700 disabled:cursor-not-allowed text-white rounded-lg font-medium transition-colors",
                r#type: "submit",
                disabled: blank || adding(),
                if adding() {
                    svg { class: "w-5 h-5 animate-spin", fill: "none", view_box: "0 0 24 24",
                        circle { class: "opacity-25", cx: "12", cy: "12", r: "10", stroke: "currentColor", stroke_width: "4" }
                        path { class: "opacity-75", fill: "currentColor", d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z" }
                    }
                } else {
                    "Add"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn loaded(payload: &str) -> PollState<Vec<Todo>> {
        let mut state = PollState::default();
        state.record(serde_json::from_str(payload).map_err(Into::into));
        state
    }

    fn body_harness((parts, expanded): (TodoPartition, bool)) -> Element {
        let show_completed = use_signal(|| expanded);
        rsx! {
            TodoBody {
                parts,
                show_completed,
                on_toggle: move |_: (i64, bool)| {},
                on_delete: move |_: i64| {},
                div { "add form" }
            }
        }
    }

    fn render(state: &PollState<Vec<Todo>>, expanded: bool) -> String {
        let parts = partition_todos(state.data.as_deref().unwrap_or_default());
        let mut dom = VirtualDom::new_with_props(body_harness, (parts, expanded));
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn single_pending_todo_from_backend() {
        let state = loaded(r#"[{"id":1,"title":"Buy milk","completed":false,"created_by":"alice"}]"#);
        assert_eq!(TodoPanel::from_poll(&state), TodoPanel::Ready);

        let html = render(&state, false);
        assert!(html.contains("1 pending"), "{html}");
        assert!(html.contains("Buy milk"));
        assert!(html.contains("Added by alice"));
        assert!(!html.contains("No todos yet"));
        assert!(!html.contains("completed"));
    }

    #[test]
    fn completed_section_starts_collapsed() {
        let state = loaded(
            r#"[{"id":1,"title":"Buy milk","completed":false,"created_by":"alice"},
                {"id":2,"title":"Fix sink","completed":true,"created_by":"bob"}]"#,
        );
        let collapsed = render(&state, false);
        assert!(collapsed.contains("1 completed"));
        assert!(!collapsed.contains("Fix sink"));

        let expanded = render(&state, true);
        assert!(expanded.contains("Fix sink"));
        assert!(expanded.contains("line-through"));
    }

    #[test]
    fn empty_list_shows_the_hint() {
        let html = render(&loaded("[]"), false);
        assert!(html.contains("0 pending"));
        assert!(html.contains("No todos yet"));
        assert!(html.contains("Add one above or via Telegram!"));
        assert!(html.contains("add form"));
    }

    #[test]
    fn loading_then_error_states() {
        assert_eq!(TodoPanel::from_poll(&PollState::default()), TodoPanel::Loading);

        let mut state = loaded("[]");
        assert_eq!(TodoPanel::from_poll(&state), TodoPanel::Ready);
        state.record(Err(anyhow!("GET /api/todos failed with status 500")));
        assert_eq!(TodoPanel::from_poll(&state), TodoPanel::Failed);
    }
}
