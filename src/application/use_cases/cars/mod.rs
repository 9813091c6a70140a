//! Car Use Cases

mod create_car;
mod delete_car;
mod get_car_by_id;
mod list_cars;
mod update_car;

pub use create_car::CreateCarUseCase;
pub use delete_car::DeleteCarUseCase;
pub use get_car_by_id::GetCarByIdUseCase;
pub use list_cars::ListCarsUseCase;
pub use update_car::UpdateCarUseCase;
