use leptos::prelude::*;

use crate::core::models::{ColumnId, TaskDraft};
use crate::core::services::{ColorScheme, HueSource, Notice, NotificationSink, TaskStore};

pub struct BoardHook {
    pub store: ReadSignal<TaskStore>,
    pub add_task: Callback<TaskDraft>,
    /// `(task_id, drop_target_id)`
    pub move_task: Callback<(String, String)>,
}

// The board owns the only writable handle to the task store
pub fn use_board<H, N>(scheme: ColorScheme, hues: H, notifier: N) -> BoardHook
where
    H: HueSource + Send + Sync + 'static,
    N: NotificationSink + Clone + Send + Sync + 'static,
{
    let store = RwSignal::new(TaskStore::with_scheme(scheme));
    let hues = StoredValue::new(hues);

    let add_task = {
        let notifier = notifier.clone();
        Callback::new(move |draft: TaskDraft| {
            let mut column_id: Option<ColumnId> = None;
            hues.update_value(|hues| {
                column_id = store.try_update(|store| store.add_task(draft, hues).column_id);
            });
            if let Some(column_id) = column_id {
                Notice::task_created(column_id).send(&notifier);
            }
        })
    };

    let move_task = Callback::new(move |(task_id, target): (String, String)| {
        let mut moved_to = None;
        store.maybe_update(|store| {
            // Unknown drop targets and stale ids are dropped without a trace
            moved_to = store.move_task(&task_id, &target).ok().map(|t| t.column_id);
            moved_to.is_some()
        });
        if let Some(column_id) = moved_to {
            Notice::task_moved(column_id).send(&notifier);
        }
    });

    BoardHook {
        store: store.read_only(),
        add_task,
        move_task,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<(String, String)>>>);

    impl Recorder {
        fn take(&self) -> Vec<(String, String)> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    impl NotificationSink for Recorder {
        fn notify(&self, title: &str, description: &str) {
            self.0
                .lock()
                .unwrap()
                .push((title.to_string(), description.to_string()));
        }
    }

    fn notice(title: &str, description: &str) -> (String, String) {
        (title.to_string(), description.to_string())
    }

    fn counting_hues() -> impl FnMut() -> u16 + Send + Sync + 'static {
        let mut hue = 0;
        move || {
            hue += 30;
            hue
        }
    }

    #[test]
    fn add_then_move_notifies_with_destination() {
        let owner = Owner::new();
        owner.with(|| {
            let recorder = Recorder::default();
            let board = use_board(ColorScheme::default(), counting_hues(), recorder.clone());

            board
                .add_task
                .run(TaskDraft::new("Plan sprint").unwrap().status("todo"));
            assert_eq!(recorder.take(), vec![notice("Task created", "New task added to To Do")]);

            let id = board.store.with_untracked(|s| s.tasks()[0].id.clone());
            board.move_task.run((id.clone(), "done".to_string()));

            assert_eq!(recorder.take(), vec![notice("Task moved", "Task moved to Done")]);
            let task = board.store.with_untracked(|s| s.get(&id).cloned()).unwrap();
            assert_eq!(task.column_id, ColumnId::Done);
        });
    }

    #[test]
    fn hue_source_advances_between_tasks() {
        let owner = Owner::new();
        owner.with(|| {
            let board = use_board(ColorScheme::default(), counting_hues(), Recorder::default());

            board.add_task.run(TaskDraft::new("first").unwrap());
            board.add_task.run(TaskDraft::new("second").unwrap());

            let colors: Vec<Option<String>> = board
                .store
                .with_untracked(|s| s.tasks().iter().map(|t| t.color.clone()).collect());
            assert_eq!(
                colors,
                vec![
                    Some("hsl(30, 70%, 80%)".to_string()),
                    Some("hsl(60, 70%, 80%)".to_string()),
                ]
            );
        });
    }

    #[test]
    fn rejected_moves_stay_silent() {
        let owner = Owner::new();
        owner.with(|| {
            let recorder = Recorder::default();
            let board = use_board(ColorScheme::default(), || 120u16, recorder.clone());

            board.add_task.run(TaskDraft::new("Write tests").unwrap());
            recorder.take();
            let id = board.store.with_untracked(|s| s.tasks()[0].id.clone());
            let before = board.store.get_untracked();

            board.move_task.run((id, "archive".to_string()));
            board.move_task.run(("no-such-task".to_string(), "done".to_string()));

            assert!(recorder.take().is_empty());
            assert_eq!(board.store.get_untracked(), before);
        });
    }
}
