use std::rc::Rc;

use yew::Reducible;

use crate::catalog::{Project, ProjectCatalog};

/// What the open modal shows, copied out of a catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub description: String,
    pub tech_tags: Vec<String>,
    pub live_link: String,
    pub code_link: String,
}

impl From<&Project> for ModalView {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            tech_tags: project.technologies.clone(),
            live_link: project.live_link.clone(),
            code_link: project.code_link.clone(),
        }
    }
}

pub enum ModalAction {
    Open(u32),
    Close,
    /// A keydown anywhere on the page.
    Key(String),
    /// A click that reached the overlay. `on_overlay` is false when the
    /// click started inside the dialog content.
    Backdrop { on_overlay: bool },
}

/// Whether a click on the overlay started on the overlay element itself,
/// not somewhere inside the dialog it wraps. Missing nodes never count.
pub fn is_backdrop_click<T: PartialEq>(target: Option<T>, overlay: Option<T>) -> bool {
    matches!((target, overlay), (Some(target), Some(overlay)) if target == overlay)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    catalog: Rc<ProjectCatalog>,
    view: Option<ModalView>,
}

impl ModalState {
    pub fn new(catalog: Rc<ProjectCatalog>) -> Self {
        Self { catalog, view: None }
    }

    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    fn closed(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            view: None,
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ModalAction::Open(id) => match self.catalog.get(id) {
                Some(project) => {
                    log::debug!("Opening project {} ({})", id, project.title);
                    Rc::new(Self {
                        catalog: self.catalog.clone(),
                        view: Some(ModalView::from(project)),
                    })
                }
                None => {
                    log::debug!("No project with id {}, modal stays closed", id);
                    self
                }
            },
            ModalAction::Key(key) if key == "Escape" && self.is_open() => Rc::new(self.closed()),
            ModalAction::Backdrop { on_overlay: true } | ModalAction::Close if self.is_open() => {
                Rc::new(self.closed())
            }
            _ => self,
        }
    }
}
