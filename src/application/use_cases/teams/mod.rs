//! Team Use Cases

mod create_team;
mod delete_team;
mod get_team_by_id;
mod list_teams;
mod update_team;

pub use create_team::CreateTeamUseCase;
pub use delete_team::DeleteTeamUseCase;
pub use get_team_by_id::GetTeamByIdUseCase;
pub use list_teams::ListTeamsUseCase;
pub use update_team::UpdateTeamUseCase;
