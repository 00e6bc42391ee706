use super::Task;

/// Rows taken by one task card (borders + title + description)
pub const ROW_HEIGHT: u16 = 4;

/// Ordered tasks of one board column plus its selection and display size
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    items: Vec<Task>,
    selected: Option<usize>,
    width: u16,
    height: u16,
}

impl TaskList {
    pub fn new(items: Vec<Task>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self {
            items,
            selected,
            width: 0,
            height: 0,
        }
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Task> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Insert at `index`, clamped to the end of the list
    pub fn insert_at(&mut self, index: usize, task: Task) {
        let index = index.min(self.items.len());
        self.items.insert(index, task);
        if self.selected.is_none() {
            self.selected = Some(0);
        }
    }

    pub fn push(&mut self, task: Task) {
        self.insert_at(self.items.len(), task);
    }

    /// Remove the task at `index`; the selection stays on the same row when possible
    pub fn remove_at(&mut self, index: usize) -> Option<Task> {
        if index >= self.items.len() {
            return None;
        }
        let task = self.items.remove(index);
        self.selected = match self.items.len() {
            0 => None,
            len => self.selected.map(|s| s.min(len - 1)),
        };
        Some(task)
    }

    /// Replace the task at `index`, returning the previous one
    pub fn replace_at(&mut self, index: usize, task: Task) -> Option<Task> {
        let slot = self.items.get_mut(index)?;
        Some(std::mem::replace(slot, task))
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Select `index`, clamped to the last item. No-op on an empty list.
    pub fn select(&mut self, index: usize) {
        if !self.items.is_empty() {
            self.selected = Some(index.min(self.items.len() - 1));
        }
    }

    pub fn select_next(&mut self) {
        if let Some(selected) = self.selected {
            self.select(selected + 1);
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(selected) = self.selected {
            self.select(selected.saturating_sub(1));
        }
    }

    /// Number of cards that fit inside the column borders
    pub fn visible_rows(&self) -> usize {
        (self.height.saturating_sub(2) / ROW_HEIGHT).max(1) as usize
    }

    /// First visible row, chosen so the selection stays in view
    pub fn scroll_offset(&self) -> usize {
        let visible = self.visible_rows();
        match self.selected {
            Some(selected) if selected >= visible => selected - visible + 1,
            _ => 0,
        }
    }
}
