mod command;
mod query;

pub use self::command::{
    DynItemCommandRepository, DynItemCommandService, ItemCommandRepositoryTrait,
    ItemCommandServiceTrait,
};
pub use self::query::{
    DynItemQueryRepository, DynItemQueryService, ItemQueryRepositoryTrait, ItemQueryServiceTrait,
};
