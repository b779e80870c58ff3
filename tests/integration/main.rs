mod helpers;
mod navigation;
mod roster_churn;
mod user_actions;
