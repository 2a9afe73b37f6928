//! Time needed to reach a savings goal with periodic contributions

mod solver;

pub use solver::{
    solve_time_to_goal, solve_time_to_goal_with_limit, GoalResult, DEFAULT_MAX_GOAL_PERIODS,
};
