//! Graph Builder application layer

mod graph_usecase;

pub use graph_usecase::{GraphBuildResult, GraphBuilderUseCase, GraphBuilderUseCaseImpl};
