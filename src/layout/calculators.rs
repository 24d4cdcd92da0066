use crate::config::LayoutConfig;
use crate::graph::Boundary;
use crate::schema::QuestionType;

/// Boundary of a vertical run of steps, axis-aligned. The optional head and
/// trailing connectors each add half a step interval so the stubs stay
/// inside the group's own boundary.
pub fn calculate_sequence_boundary(
    boundaries: &[Boundary],
    with_head_edge: bool,
    with_trailing_edge: bool,
    config: &LayoutConfig,
) -> Boundary {
    if boundaries.is_empty() {
        return Boundary::default();
    }
    let axis_x = boundaries.iter().map(|b| b.axis_x).fold(0.0, f32::max);
    let right = boundaries
        .iter()
        .map(|b| b.right_of_axis())
        .fold(0.0, f32::max);
    let stub = config.edge_stub();
    let mut height = boundaries.iter().map(|b| b.height).sum::<f32>()
        + (boundaries.len() - 1) as f32 * config.element_interval_y;
    let mut axis_y = boundaries[0].axis_y;
    if with_head_edge {
        height += stub;
        axis_y += stub;
    }
    if with_trailing_edge {
        height += stub;
    }
    Boundary {
        width: axis_x + right,
        height,
        axis_x,
        axis_y,
    }
}

/// Row of branches laid side by side. Every branch reserves a trailing
/// interval so bypass drops and the closing bus have horizontal room. The
/// row's axis is the first branch's axis; flow enters branches from above.
fn branch_row_boundary(branches: &[Boundary], config: &LayoutConfig) -> Boundary {
    if branches.is_empty() {
        return Boundary::default();
    }
    let width = branches
        .iter()
        .map(|b| b.width + config.branch_interval_x)
        .sum();
    let height = branches.iter().map(|b| b.height).fold(0.0, f32::max);
    Boundary {
        width,
        height,
        axis_x: branches[0].axis_x,
        axis_y: height / 2.0,
    }
}

/// Header, diamond and branch row stacked with branch intervals between
/// them and one closing interval for the convergence bus.
fn branching_container(
    condition: &Boundary,
    choice: &Boundary,
    row: &Boundary,
    config: &LayoutConfig,
) -> Boundary {
    let axis_x = condition.axis_x.max(choice.axis_x).max(row.axis_x);
    let right = condition
        .right_of_axis()
        .max(choice.right_of_axis())
        .max(row.right_of_axis());
    let gap = config.branch_interval_y;
    let height = condition.height + gap + choice.height + gap + row.height + gap;
    Boundary {
        width: axis_x + right,
        height,
        axis_x,
        axis_y: height / 2.0,
    }
}

pub fn calculate_if_else_boundary(
    condition: Option<&Boundary>,
    choice: Option<&Boundary>,
    if_branch: &Boundary,
    else_branch: &Boundary,
    config: &LayoutConfig,
) -> Boundary {
    let (Some(condition), Some(choice)) = (condition, choice) else {
        return Boundary::default();
    };
    let row = branch_row_boundary(&[*if_branch, *else_branch], config);
    branching_container(condition, choice, &row, config)
}

pub fn calculate_switch_case_boundary(
    condition: Option<&Boundary>,
    choice: Option<&Boundary>,
    branches: &[Boundary],
    config: &LayoutConfig,
) -> Boundary {
    let (Some(condition), Some(choice)) = (condition, choice) else {
        return Boundary::default();
    };
    let row = branch_row_boundary(branches, config);
    branching_container(condition, choice, &row, config)
}

/// Loop stack with a reserved margin strip on the left for the loop-back
/// rail. The axis shifts right by the margin so flow still runs through the
/// stacked parts.
pub fn calculate_foreach_boundary(
    detail: Option<&Boundary>,
    steps: Option<&Boundary>,
    loop_begin: &Boundary,
    loop_end: &Boundary,
    config: &LayoutConfig,
) -> Boundary {
    let (Some(detail), Some(steps)) = (detail, steps) else {
        return Boundary::default();
    };
    let parts = [detail, loop_begin, steps, loop_end];
    let stack_axis = parts.iter().map(|b| b.axis_x).fold(0.0, f32::max);
    let right = parts.iter().map(|b| b.right_of_axis()).fold(0.0, f32::max);
    let stub = config.edge_stub();
    let height =
        detail.height + loop_begin.height + steps.height + loop_end.height + 3.0 * stub;
    let axis_x = config.loop_edge_margin + stack_axis;
    Boundary {
        width: axis_x + right,
        height,
        axis_x,
        axis_y: height / 2.0,
    }
}

/// Bot-asks above user-answers; the invalid-prompt brick widens the
/// boundary to the right of the user-answers row.
pub fn calculate_base_input_boundary(
    bot_asks: &Boundary,
    user_answers: &Boundary,
    invalid_prompt: Option<&Boundary>,
    config: &LayoutConfig,
) -> Boundary {
    let axis_x = bot_asks.axis_x.max(user_answers.axis_x);
    let right = bot_asks.right_of_axis().max(user_answers.right_of_axis());
    let height = bot_asks.height + config.element_interval_y + user_answers.height;
    let mut width = axis_x + right;
    if let Some(brick) = invalid_prompt {
        width += config.element_interval_x / 2.0 + brick.width;
    }
    Boundary {
        width,
        height,
        axis_x,
        axis_y: height / 2.0,
    }
}

/// Text and number questions are a bare prompt card. Choice and confirm
/// questions branch like a switch, with an extra interval so the
/// convergence bus can continue downward.
pub fn calculate_question_boundary(
    question: &Boundary,
    choice: Option<&Boundary>,
    branches: &[Boundary],
    question_type: QuestionType,
    config: &LayoutConfig,
) -> Boundary {
    match question_type {
        QuestionType::Text | QuestionType::Number => *question,
        QuestionType::Confirm | QuestionType::Choice => {
            let Some(choice) = choice else {
                return *question;
            };
            let row = branch_row_boundary(branches, config);
            let mut boundary = branching_container(question, choice, &row, config);
            boundary.height += config.branch_interval_y;
            boundary.axis_y = boundary.height / 2.0;
            boundary
        }
    }
}

/// Trigger lanes stacked top to bottom, left-aligned.
pub fn calculate_dialog_boundary(lanes: &[Boundary], config: &LayoutConfig) -> Boundary {
    if lanes.is_empty() {
        return Boundary::default();
    }
    let width = lanes.iter().map(|l| l.width).fold(0.0, f32::max);
    let height = lanes.iter().map(|l| l.height).sum::<f32>()
        + (lanes.len() - 1) as f32 * config.trigger_interval_y;
    Boundary::new(width, height)
}
