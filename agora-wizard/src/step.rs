//! Step tables and validation for the creation wizard.
//!
//! Each creatable kind has a fixed linear step sequence. The tables here
//! are the single source of truth for step counts, titles, the subordinate
//! view each step requires, and the predicates gating `advance`/`submit`.

use serde::{Deserialize, Serialize};

use graph_model::{NodeDraft, NodeKind};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Maximum categories attachable to a node.
pub const MAX_CATEGORIES: usize = 3;

/// The subordinate input view a step requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum StepView {
    /// Pick the node kind
    TypeSelect,
    /// Single-line or numeric text entry
    TextInput,
    /// Definition editor
    DefinitionInput,
    /// Category (or unit-category) multi-select
    CategoryPicker,
    /// Keyword / word multi-select
    KeywordPicker,
    /// Opening discussion comment editor
    DiscussionInput,
    /// Final review screen with the submit control
    ReviewAndSubmit,
}

/// One step of a creation sequence. Derived from the tables, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    /// Screen title for the step
    pub title: &'static str,
    /// View the step renders
    pub view: StepView,
}

const TYPE_SELECT: StepDefinition = StepDefinition {
    title: "Choose what to create",
    view: StepView::TypeSelect,
};

const DISCUSSION: StepDefinition = StepDefinition {
    title: "Start the discussion",
    view: StepView::DiscussionInput,
};

const REVIEW: StepDefinition = StepDefinition {
    title: "Review and publish",
    view: StepView::ReviewAndSubmit,
};

const CATEGORIES: StepDefinition = StepDefinition {
    title: "Add categories",
    view: StepView::CategoryPicker,
};

const KEYWORDS: StepDefinition = StepDefinition {
    title: "Add keywords",
    view: StepView::KeywordPicker,
};

const UNSET_STEPS: [StepDefinition; 1] = [TYPE_SELECT];

const WORD_STEPS: [StepDefinition; 5] = [
    TYPE_SELECT,
    StepDefinition {
        title: "Choose a word",
        view: StepView::TextInput,
    },
    StepDefinition {
        title: "Define it",
        view: StepView::DefinitionInput,
    },
    DISCUSSION,
    REVIEW,
];

const STATEMENT_STEPS: [StepDefinition; 6] = [
    TYPE_SELECT,
    StepDefinition {
        title: "Make your statement",
        view: StepView::TextInput,
    },
    CATEGORIES,
    KEYWORDS,
    DISCUSSION,
    REVIEW,
];

const OPEN_QUESTION_STEPS: [StepDefinition; 6] = [
    TYPE_SELECT,
    StepDefinition {
        title: "Ask your question",
        view: StepView::TextInput,
    },
    CATEGORIES,
    KEYWORDS,
    DISCUSSION,
    REVIEW,
];

const ANSWER_STEPS: [StepDefinition; 6] = [
    TYPE_SELECT,
    StepDefinition {
        title: "Write your answer",
        view: StepView::TextInput,
    },
    CATEGORIES,
    KEYWORDS,
    DISCUSSION,
    REVIEW,
];

const EVIDENCE_STEPS: [StepDefinition; 6] = [
    TYPE_SELECT,
    StepDefinition {
        title: "Describe the evidence",
        view: StepView::TextInput,
    },
    CATEGORIES,
    KEYWORDS,
    DISCUSSION,
    REVIEW,
];

const QUANTITY_STEPS: [StepDefinition; 7] = [
    TYPE_SELECT,
    StepDefinition {
        title: "Pick a unit",
        view: StepView::CategoryPicker,
    },
    StepDefinition {
        title: "Enter the value",
        view: StepView::TextInput,
    },
    CATEGORIES,
    KEYWORDS,
    DISCUSSION,
    REVIEW,
];

const CATEGORY_STEPS: [StepDefinition; 4] = [
    TYPE_SELECT,
    StepDefinition {
        title: "Select composing words",
        view: StepView::KeywordPicker,
    },
    DISCUSSION,
    REVIEW,
];

/// The step sequence for a (possibly unchosen) kind.
pub fn steps_for(kind: Option<NodeKind>) -> &'static [StepDefinition] {
    match kind {
        None => &UNSET_STEPS,
        Some(NodeKind::Word) => &WORD_STEPS,
        Some(NodeKind::Statement) => &STATEMENT_STEPS,
        Some(NodeKind::OpenQuestion) => &OPEN_QUESTION_STEPS,
        Some(NodeKind::Answer) => &ANSWER_STEPS,
        Some(NodeKind::Evidence) => &EVIDENCE_STEPS,
        Some(NodeKind::Quantity) => &QUANTITY_STEPS,
        Some(NodeKind::Category) => &CATEGORY_STEPS,
        // Comments never enter the wizard; only the type screen exists
        Some(NodeKind::Comment) => &UNSET_STEPS,
    }
}

/// Number of steps for a kind. 1 while no kind is chosen.
pub fn max_steps(kind: Option<NodeKind>) -> u8 {
    steps_for(kind).len() as u8
}

/// The definition of a step. Steps outside `[1, max_steps]` clamp.
pub fn step_definition(kind: Option<NodeKind>, step: u8) -> StepDefinition {
    let steps = steps_for(kind);
    let index = (step.max(1) as usize - 1).min(steps.len() - 1);
    steps[index]
}

/// Whether leaving this step triggers the word existence check.
pub fn requires_existence_check(kind: Option<NodeKind>, step: u8) -> bool {
    kind == Some(NodeKind::Word) && step == 2
}

/// Whether the given step's inputs allow advancing past it.
///
/// Step 1 is valid once a kind is chosen; the wizard never advances while
/// the kind is unset.
pub fn is_step_valid(kind: Option<NodeKind>, step: u8, draft: &NodeDraft) -> bool {
    let Some(kind) = kind else {
        return false;
    };

    match kind {
        NodeKind::Word => match step {
            1 => true,
            2 => !draft.word_text.trim().is_empty(),
            3 | 4 => true,
            5 => draft_valid(kind, draft),
            _ => false,
        },
        NodeKind::Statement | NodeKind::OpenQuestion | NodeKind::Answer | NodeKind::Evidence => {
            match step {
                1 => true,
                2 => !draft.primary_text.trim().is_empty(),
                3 => draft.category_ids.len() <= MAX_CATEGORIES,
                4 | 5 => true,
                6 => draft_valid(kind, draft),
                _ => false,
            }
        }
        NodeKind::Quantity => match step {
            1 => true,
            2 => draft.unit_category_id.is_some() && draft.unit_id.is_some(),
            3 => draft.value_text.trim().parse::<f64>().is_ok(),
            4 => draft.category_ids.len() <= MAX_CATEGORIES,
            5 | 6 => true,
            7 => draft_valid(kind, draft),
            _ => false,
        },
        NodeKind::Category => match step {
            1 => true,
            2 => !draft.source_word_ids.is_empty(),
            3 => true,
            4 => draft_valid(kind, draft),
            _ => false,
        },
        NodeKind::Comment => false,
    }
}

/// Whether the whole draft is submittable for a kind.
pub fn draft_valid(kind: NodeKind, draft: &NodeDraft) -> bool {
    let key = Some(kind);
    (1..max_steps(key)).all(|step| is_step_valid(key, step, draft))
}
