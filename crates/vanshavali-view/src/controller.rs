use tracing::{debug, warn};
use vanshavali_data::Dataset;
use vanshavali_layout::{
    baseline_positions, layout_for, resolve_lineage, GraphIndex, LayoutConfig, LayoutMode,
    LineageLayout, PositionMap,
};

use crate::search::find_by_name;
use crate::surface::{FitRequest, Surface};
use crate::{Event, FocusError, Frame, Outcome, ViewError, ViewState};

#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub mode: LayoutMode,
    pub config: LayoutConfig,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Desktop,
            config: LayoutConfig::default(),
        }
    }
}

impl ControllerOptions {
    pub fn mobile() -> Self {
        Self {
            mode: LayoutMode::Mobile,
            ..Self::default()
        }
    }
}

/// Owns the view state and the frame derived from it. Each transition
/// builds a new frame from scratch; a failed transition leaves both as they
/// were.
pub struct Controller {
    index: GraphIndex,
    mode: LayoutMode,
    layout: Box<dyn LineageLayout>,
    baseline: PositionMap,
    state: ViewState,
    frame: Frame,
}

impl Controller {
    pub fn new(dataset: Dataset, options: ControllerOptions) -> Result<Self, ViewError> {
        let index = GraphIndex::build(dataset)?;
        let baseline = baseline_positions(&index, options.config.baseline(options.mode));
        let frame = Frame::overview(&index, &baseline);
        Ok(Self {
            layout: layout_for(options.mode, &options.config),
            mode: options.mode,
            index,
            baseline,
            state: ViewState::Overview,
            frame,
        })
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn index(&self) -> &GraphIndex {
        &self.index
    }

    pub fn fit_request(&self) -> FitRequest {
        match self.mode {
            LayoutMode::Desktop => FitRequest::desktop(),
            LayoutMode::Mobile => FitRequest::mobile(),
        }
    }

    /// Runs one event and reports the result to `surface`. Committed
    /// transitions are presented and followed by a fit request; search misses
    /// and dead ends become notices; invalid targets are dropped silently.
    pub fn handle(&mut self, event: Event, surface: &mut dyn Surface) -> Outcome {
        debug!(?event, state = ?self.state, "handling event");
        let result = match &event {
            Event::NodeSelect(id) => self.select_node(id).map(|_| ()),
            Event::BackgroundSelect => {
                self.select_background();
                Ok(())
            }
            Event::SearchSubmit(text) => self.submit_search(text).map(|_| ()),
            Event::Back => self.step_back().map(|_| ()),
            Event::Home => self.go_home().map(|_| ()),
        };

        match result {
            Ok(()) => {
                surface.present(&self.frame);
                surface.fit_view(self.fit_request());
                Outcome::Transitioned
            }
            Err(err) if err.is_silent() => {
                debug!(%err, "event ignored");
                Outcome::Ignored
            }
            Err(err) => {
                if err.is_user_facing() {
                    surface.notify(&err.to_string());
                } else {
                    warn!(%err, "transition aborted");
                }
                Outcome::Refused(err)
            }
        }
    }

    pub fn select_node(&mut self, id: &str) -> Result<&Frame, FocusError> {
        if self.index.is_decoration(id) || !self.index.contains(id) {
            return Err(FocusError::InvalidTarget(id.to_string()));
        }
        if self.mode == LayoutMode::Mobile {
            self.check_step(id)?;
        }
        self.focus(id)
    }

    pub fn select_background(&mut self) -> &Frame {
        let frame = Frame::overview(&self.index, &self.baseline);
        self.commit(frame);
        &self.frame
    }

    pub fn submit_search(&mut self, text: &str) -> Result<&Frame, FocusError> {
        let id = find_by_name(&self.index.dataset().people, text)
            .map(|person| person.id.clone())
            .ok_or_else(|| FocusError::SearchNotFound(text.trim().to_string()))?;
        self.focus(&id)
    }

    /// Parent of the focused person, or the overview from a root.
    pub fn step_back(&mut self) -> Result<&Frame, FocusError> {
        let parent = match &self.state {
            ViewState::Focused(current) => self.index.parent_of(current).map(str::to_string),
            ViewState::Overview => None,
        };
        match parent {
            Some(parent) => self.focus(&parent),
            None => Ok(self.select_background()),
        }
    }

    pub fn go_home(&mut self) -> Result<&Frame, FocusError> {
        let root = self
            .index
            .roots()
            .next()
            .map(|person| person.id.clone())
            .ok_or(FocusError::EmptyTree)?;
        self.focus(&root)
    }

    /// Step navigation only moves along the breadcrumb or into a node that
    /// has children of its own. Clicking the current node does nothing.
    fn check_step(&self, id: &str) -> Result<(), FocusError> {
        let ViewState::Focused(current) = &self.state else {
            return Ok(());
        };
        if id == current {
            return Err(FocusError::AlreadyFocused(id.to_string()));
        }
        let on_path = self
            .frame
            .node(id)
            .is_some_and(|node| node.roles.ancestor);
        if on_path || !self.index.children_of(id).is_empty() {
            return Ok(());
        }
        let name = self
            .index
            .person(id)
            .map(|person| person.name.clone())
            .unwrap_or_default();
        Err(FocusError::EndOfLineage {
            id: id.to_string(),
            name,
        })
    }

    fn focus(&mut self, id: &str) -> Result<&Frame, FocusError> {
        let lineage = resolve_lineage(&self.index, id)?;
        let positions = self.layout.place(&lineage, &self.index);
        let frame = Frame::focused(&self.index, &lineage, &positions, &self.baseline);
        self.commit(frame);
        Ok(&self.frame)
    }

    fn commit(&mut self, frame: Frame) {
        debug!(from = ?self.state, to = ?frame.state, "view state committed");
        self.state = frame.state.clone();
        self.frame = frame;
    }
}
