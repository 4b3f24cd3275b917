use dep_catalog::catalog::services::DropdownViewModel;
use dep_catalog::prelude::*;
use std::cell::RefCell;

/// Mock DropdownPresenter recording every rendered view model
#[derive(Default)]
pub struct MockDropdownPresenter {
    pub renders: RefCell<Vec<DropdownViewModel>>,
}

impl MockDropdownPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_count(&self) -> usize {
        self.renders.borrow().len()
    }

    pub fn last(&self) -> Option<DropdownViewModel> {
        self.renders.borrow().last().cloned()
    }
}

impl DropdownPresenter for MockDropdownPresenter {
    fn render(&self, model: &DropdownViewModel) {
        self.renders.borrow_mut().push(model.clone());
    }
}
