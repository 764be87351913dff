//! The forwarder Deployment in its two variants.

use crate::constants::FORWARDER;
use crate::crd::{BackendSpec, OcmLogForwarder, OcmLogForwarderConfig};
use crate::resources::templates::{self, DeploymentTemplate, ForwarderEnvironment};
use crate::resources::ResourceDescriptor;

/// A forwarder managed by a collection
#[derive(Debug, Clone, Copy)]
pub struct CollectionScoped<'a> {
    pub parent: &'a OcmLogForwarder,
    pub collection: &'a OcmLogForwarderConfig,
}

/// Deployment of a standalone forwarder, in its own namespace with its own
/// service account and secret references.
pub fn standalone(parent: &OcmLogForwarder) -> ResourceDescriptor {
    let backend = &parent.spec.backend;
    templates::deployment(&DeploymentTemplate {
        name: parent.workload_name(),
        namespace: parent.workload_namespace(),
        service_account: parent.workload_name(),
        forwarder_version: &parent.spec.forwarder_version,
        environment: environment(
            parent,
            backend,
            &parent.spec.ocm.secret_ref,
            backend.elastic_search.secret_name(),
        ),
    })
}

/// Deployment of a collection-managed forwarder.
///
/// Runs in the collection's namespace under the collection's service account.
/// Backend settings come from the collection and secret names are the fixed
/// ones the collection's RBAC grants.
pub fn collection_scoped(input: &CollectionScoped<'_>) -> ResourceDescriptor {
    let CollectionScoped { parent, collection } = *input;
    templates::deployment(&DeploymentTemplate {
        name: parent.workload_name(),
        namespace: &collection.spec.forwarder_namespace,
        service_account: collection.workload_name(),
        forwarder_version: &parent.spec.forwarder_version,
        environment: environment(
            parent,
            &collection.spec.backend,
            FORWARDER.ocm_secret_name,
            FORWARDER.elastic_secret_name,
        ),
    })
}

fn environment<'a>(
    parent: &'a OcmLogForwarder,
    backend: &'a BackendSpec,
    ocm_secret_name: &'a str,
    elasticsearch_secret_name: &'a str,
) -> ForwarderEnvironment<'a> {
    ForwarderEnvironment {
        cluster_id: &parent.spec.ocm.cluster_id,
        poll_interval_minutes: parent.spec.ocm.poll_interval_minutes,
        ocm_secret_name,
        backend_type: backend.backend_type.as_str(),
        elasticsearch_url: &backend.elastic_search.url,
        elasticsearch_auth_type: backend.elastic_search.auth_type.as_str(),
        elasticsearch_index: &backend.elastic_search.index,
        elasticsearch_secret_name,
        debug: parent.spec.debug,
    }
}

pub(crate) fn standalone_backend_is_elasticsearch(parent: &OcmLogForwarder) -> bool {
    parent.spec.backend.is_elasticsearch()
}

pub(crate) fn collection_backend_is_elasticsearch(input: &CollectionScoped<'_>) -> bool {
    input.collection.spec.backend.is_elasticsearch()
}
