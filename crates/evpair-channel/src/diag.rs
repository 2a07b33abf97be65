//! Best-effort endpoint naming for socket diagnostics.
//!
//! A fresh socket pair is anonymous: socket tables show two unnamed
//! entries nobody can attribute. When a [`PairConfig::debug_name`] is set,
//! each end gets bound to an abstract-namespace address derived from that
//! label so a leaked or wedged channel can be traced back to its creator.
//! Purely diagnostic: every failure here is logged and swallowed, and
//! nothing in this module affects the channel contract.
//!
//! [`PairConfig::debug_name`]: crate::PairConfig::debug_name

use std::os::fd::BorrowedFd;

use tracing::debug;

/// A `"<process>-<thread>"` label built from `/proc` comm names.
///
/// Falls back to `"t<pid>"` and `"t<tid>"` forms when a name cannot be
/// read. This is the conventional value for
/// [`PairConfig::debug_name`](crate::PairConfig::debug_name); any other
/// label works just as well.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn process_thread_label() -> String {
    // SAFETY: gettid has no preconditions.
    let tid = unsafe { libc::gettid() };
    let process = comm_name("/proc/self/comm")
        .unwrap_or_else(|| format!("t{}", std::process::id()));
    let thread = comm_name(&format!("/proc/self/task/{tid}/comm"))
        .unwrap_or_else(|| format!("t{tid}"));
    format!("{process}-{thread}")
}

/// A `"t<pid>"` label; comm names are a Linux facility.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn process_thread_label() -> String {
    format!("t{}", std::process::id())
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn comm_name(path: &str) -> Option<String> {
    let raw = std::fs::read_to_string(path).ok()?;
    let trimmed = raw.trim_end_matches('\n');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Bind both endpoints to `"<label>-f<fd>"` abstract addresses.
pub(crate) fn name_endpoints(recv: BorrowedFd<'_>, send: BorrowedFd<'_>, label: &str) {
    bind_abstract(recv, label);
    bind_abstract(send, label);
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn bind_abstract(fd: BorrowedFd<'_>, label: &str) {
    use std::os::fd::AsRawFd;

    // SAFETY: sockaddr_un is a plain C struct for which all-zero bytes are
    // a valid value.
    let mut addr: libc::sockaddr_un = unsafe { std::mem::zeroed() };
    addr.sun_family = libc::AF_UNIX as libc::sa_family_t;

    // Abstract names start with a NUL byte and are not NUL-terminated;
    // anything past sun_path is silently cut off.
    let name = format!("{label}-f{}", fd.as_raw_fd());
    let len = name.len().min(addr.sun_path.len() - 1);
    for (dst, src) in addr.sun_path[1..1 + len].iter_mut().zip(name.as_bytes()) {
        *dst = *src as libc::c_char;
    }
    let addr_len = (std::mem::size_of::<libc::sa_family_t>() + 1 + len) as libc::socklen_t;

    // SAFETY: `addr` outlives the call and `addr_len` never exceeds its
    // size.
    let rc = unsafe {
        libc::bind(
            fd.as_raw_fd(),
            (&addr as *const libc::sockaddr_un).cast(),
            addr_len,
        )
    };
    if rc != 0 {
        debug!(%name, err = %std::io::Error::last_os_error(), "debug name not applied");
    } else {
        debug!(%name, "debug name applied");
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn bind_abstract(_fd: BorrowedFd<'_>, _label: &str) {
    debug!("abstract socket names are unsupported on this platform");
}
