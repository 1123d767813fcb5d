//! Presentation state for the task list screen.
//!
//! # Responsibility
//! - Own the ordered task list for one mounted screen.
//! - Track per-card expand/collapse flags keyed by task identity.
//!
//! # Invariants
//! - State exists only between `mount` and `unmount`.
//! - Task IDs are unique within the list; a duplicate is rejected.
//! - Newly added cards start collapsed.
//! - Toggling a card never touches the task itself.

use crate::config::TaskTemplate;
use crate::model::task::{Task, TaskId};
use crate::screen::observable::{ListChange, ObservableList, SubscriptionId};
use crate::view::card::TaskCardView;
use crate::view::format::DurationFormatError;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Screen state mutation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenError {
    /// A task with this ID is already in the list.
    DuplicateTask(TaskId),
}

impl Display for ScreenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTask(id) => write!(f, "task already in list: {id}"),
        }
    }
}

impl Error for ScreenError {}

/// State holder for one mounted task list screen.
#[derive(Debug)]
pub struct TaskListState {
    tasks: ObservableList<Task>,
    expanded: HashMap<TaskId, bool>,
    template: TaskTemplate,
}

impl TaskListState {
    /// Creates empty screen state when the screen mounts.
    pub fn mount(template: TaskTemplate) -> Self {
        info!("event=screen_mount module=screen status=ok");
        Self {
            tasks: ObservableList::new(),
            expanded: HashMap::new(),
            template,
        }
    }

    /// Tears the screen down. Observers receive a final `Cleared` change.
    pub fn unmount(mut self) {
        let removed = self.tasks.clear();
        self.expanded.clear();
        info!("event=screen_unmount module=screen status=ok removed={removed}");
    }

    pub fn template(&self) -> &TaskTemplate {
        &self.template
    }

    /// Appends a task and returns its ID.
    ///
    /// # Errors
    /// - Returns [`ScreenError::DuplicateTask`] when the ID is already listed;
    ///   the list and card state are left unchanged.
    pub fn add_task(&mut self, task: Task) -> Result<TaskId, ScreenError> {
        let id = task.id();
        if self.expanded.contains_key(&id) {
            warn!(
                "event=task_rejected module=screen status=error reason=duplicate_id task_id={id}"
            );
            return Err(ScreenError::DuplicateTask(id));
        }
        Ok(self.append(task))
    }

    /// Appends a task built from the template, named after its position.
    ///
    /// The template always yields a freshly generated ID.
    pub fn add_from_template(&mut self) -> TaskId {
        let task = self.template.instantiate(self.tasks.len());
        self.append(task)
    }

    /// Flips the expanded flag of one card and returns the new value.
    ///
    /// Returns `None` when no card with `id` exists.
    pub fn toggle_expanded(&mut self, id: TaskId) -> Option<bool> {
        let flag = self.expanded.get_mut(&id)?;
        *flag = !*flag;
        debug!(
            "event=card_toggled module=screen status=ok task_id={id} expanded={}",
            *flag
        );
        Some(*flag)
    }

    pub fn is_expanded(&self, id: TaskId) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Renders every card in list order.
    ///
    /// # Errors
    /// - Returns [`DurationFormatError`] if any task has a negative duration.
    pub fn cards(&self) -> Result<Vec<TaskCardView>, DurationFormatError> {
        self.tasks
            .iter()
            .map(|task| TaskCardView::render(task, self.is_expanded(task.id())))
            .collect()
    }

    /// Subscribes to list changes.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(ListChange, &[Task]) + Send + 'static,
    {
        self.tasks.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.tasks.unsubscribe(id)
    }

    fn append(&mut self, task: Task) -> TaskId {
        let id = task.id();
        self.expanded.insert(id, false);
        let index = self.tasks.push(task);
        debug!("event=task_added module=screen status=ok task_id={id} index={index}");
        id
    }
}
