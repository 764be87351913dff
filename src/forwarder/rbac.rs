//! RBAC for a standalone forwarder.
//!
//! Each forwarder gets its own service account plus one Role/RoleBinding pair
//! per secret it reads.

use crate::constants::FORWARDER;
use crate::crd::OcmLogForwarder;
use crate::resources::{templates, ResourceDescriptor};

pub fn service_account(parent: &OcmLogForwarder) -> ResourceDescriptor {
    templates::service_account(parent.workload_name(), parent.workload_namespace())
}

pub fn ocm_role(parent: &OcmLogForwarder) -> ResourceDescriptor {
    let name = parent.workload_name();
    templates::secret_reader_role(
        &FORWARDER.ocm_rbac_name(name),
        parent.workload_namespace(),
        &parent.spec.ocm.secret_ref,
    )
}

pub fn elastic_role(parent: &OcmLogForwarder) -> ResourceDescriptor {
    let name = parent.workload_name();
    templates::secret_reader_role(
        &FORWARDER.elastic_rbac_name(name),
        parent.workload_namespace(),
        parent.spec.backend.elastic_search.secret_name(),
    )
}

pub fn ocm_role_binding(parent: &OcmLogForwarder) -> ResourceDescriptor {
    let name = parent.workload_name();
    templates::role_binding(&FORWARDER.ocm_rbac_name(name), parent.workload_namespace(), name)
}

pub fn elastic_role_binding(parent: &OcmLogForwarder) -> ResourceDescriptor {
    let name = parent.workload_name();
    templates::role_binding(
        &FORWARDER.elastic_rbac_name(name),
        parent.workload_namespace(),
        name,
    )
}
