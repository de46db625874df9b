use crate::ecs::HostRecord;
use crate::Result;
use std::io::Write;

/// Writes each chain as five lines (cluster, service, task, container
/// instance, EC2 instance) followed by a blank line.
pub fn write_hosts<W: Write>(out: &mut W, hosts: &[HostRecord]) -> Result<()> {
    for host in hosts {
        writeln!(out, "{}", host.cluster_arn())?;
        writeln!(out, "{}", host.service_arn())?;
        writeln!(out, "{}", host.task_arn)?;
        writeln!(out, "{}", host.container_instance_arn)?;
        writeln!(out, "{}", host.ec2_instance_id)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
