//! Action requests and results, faults and jobs.

use crate::access::User;
use crate::cluster::Cluster;
use crate::enums::{JobStatus, StepStatus, StepType};
use crate::host::Host;
use crate::storage::{Disk, StorageDomain};
use crate::template::Template;
use crate::vm::{Snapshot, Vm};
use chrono::{DateTime, FixedOffset};
use ovirt_core::List;

xml_struct! {
    /// Parameters and result of an action such as `start` or `migrate`.
    pub struct Action as "action" in "actions" {
        builder ActionBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            /// Completion state reported by the engine, e.g. `complete`.
            status: String = "status",
            reason: String = "reason",
            r#async: bool = "async",
            force: bool = "force",
            filter: bool = "filter",
            pause: bool = "pause",
            use_cloud_init: bool = "use_cloud_init",
            discard_snapshots: bool = "discard_snapshots",
            restore_memory: bool = "restore_memory",
            maintenance_enabled: bool = "maintenance_enabled",
            activate: bool = "activate",
        }
        nested {
            /// Present when the action failed.
            fault: Fault = "fault",
            job: Job = "job",
            vm: Vm = "vm",
            host: Host = "host",
            disk: Disk = "disk",
            storage_domain: StorageDomain = "storage_domain",
            template: Template = "template",
            snapshot: Snapshot = "snapshot",
            cluster: Cluster = "cluster",
        }
        links {}
    }
}

xml_struct! {
    /// Error reported by the engine.
    pub struct Fault as "fault" in "faults" {
        builder FaultBuilder;
        attributes {}
        elements {
            reason: String = "reason",
            detail: String = "detail",
        }
        nested {}
        links {}
    }
}

xml_struct! {
    /// A long running engine operation.
    pub struct Job as "job" in "jobs" {
        builder JobBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            description: String = "description",
            comment: String = "comment",
            status: JobStatus = "status",
            auto_cleared: bool = "auto_cleared",
            external: bool = "external",
            start_time: DateTime<FixedOffset> = "start_time",
            end_time: DateTime<FixedOffset> = "end_time",
            last_updated: DateTime<FixedOffset> = "last_updated",
            steps: List<Step> = "steps",
        }
        nested {
            owner: User = "owner",
        }
        links {
            "steps" => steps,
        }
    }
}

xml_struct! {
    /// One step of a job.
    pub struct Step as "step" in "steps" {
        builder StepBuilder;
        attributes {
            id: String = "id",
            href: String = "href",
        }
        elements {
            description: String = "description",
            comment: String = "comment",
            number: i64 = "number",
            /// Completion percentage.
            progress: i64 = "progress",
            status: StepStatus = "status",
            r#type: StepType = "type",
            external: bool = "external",
            start_time: DateTime<FixedOffset> = "start_time",
            end_time: DateTime<FixedOffset> = "end_time",
        }
        nested {
            job: Job = "job",
            parent_step: Step = "parent_step",
            execution_host: Host = "execution_host",
        }
        links {}
    }
}
