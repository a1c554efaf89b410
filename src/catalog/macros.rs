/// Declares the catalog rows of a repository together with one accessor
/// function per row.
///
/// Each row names its accessor explicitly, so graphs whose names are not
/// valid identifiers (`BacillusSp.Unc438cl73tsus30`) still get one.
macro_rules! graph_catalog {
    (@option) => {
        None
    };
    (@option $value:expr) => {
        Some($value)
    };
    (
        repository: $repository:expr;
        $(
            $(#[$meta:meta])*
            $accessor:ident => {
                name: $name:literal,
                versions: [$($version:literal),+ $(,)?],
                default_version: $default_version:literal,
                description: $description:literal,
                $(citation: $citation:expr,)?
                $(summary: $summary:expr,)?
                $(arguments: [$(($key:literal, $value:expr)),* $(,)?],)?
                $(callbacks: [$($callback:expr),* $(,)?],)?
            }
        )*
    ) => {
        /// Catalog rows of this repository
        pub static ENTRIES: &[$crate::catalog::GraphEntry] = &[
            $(
                $crate::catalog::GraphEntry {
                    name: $name,
                    repository: $repository,
                    versions: &[$($version),+],
                    default_version: $default_version,
                    description: $description,
                    citation: graph_catalog!(@option $($citation)?),
                    summary: graph_catalog!(@option $($summary)?),
                    arguments: &[$($(($key, $value)),*)?],
                    callbacks: &[$($($callback),*)?],
                },
            )*
        ];

        $(
            $(#[$meta])*
            pub async fn $accessor<B>(
                backend: &B,
                options: $crate::retrieval::RetrievalOptions,
            ) -> $crate::error::Result<B::Graph>
            where
                B: $crate::retrieval::GraphBackend + ?Sized,
            {
                $crate::retrieval::retrieve_graph(backend, $name, $repository, options).await
            }
        )*
    };
}
