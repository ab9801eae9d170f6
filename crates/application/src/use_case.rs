use async_trait::async_trait;

use catalog_core::DomainResult;

/// A single application operation: input in, output or domain error out.
#[async_trait]
pub trait UseCase<I, O>: Send + Sync
where
    I: Send + 'static,
{
    async fn execute(&self, input: I) -> DomainResult<O>;
}
