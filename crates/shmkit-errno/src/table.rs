// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The errno description table.
//!
//! Some platforms alias codes (`EWOULDBLOCK == EAGAIN` and, on Linux,
//! `ENOTSUP == EOPNOTSUPP`). Lookups return the first matching entry, so the
//! canonical name must come first.
//!
//! The STREAMS codes (`ENODATA`, `ENOSR`, `ENOSTR`, `ETIME`) live in a second
//! table that only exists where libc defines them.

/// Human-readable description of one errno value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrnoDescription {
    /// Numeric error code as returned by the OS.
    pub code: i32,
    /// Symbolic name, e.g. `"EINVAL"`.
    pub name: &'static str,
    /// One-line message.
    pub message: &'static str,
    /// Longer explanation, may be empty.
    pub help: &'static str,
}

/// Looks up the description of `code`.
pub fn describe(code: i32) -> Option<&'static ErrnoDescription> {
    DESCRIPTIONS
        .iter()
        .chain(STREAMS_DESCRIPTIONS)
        .find(|d| d.code == code)
}

macro_rules! errno {
    ($code:ident, $message:literal, $help:literal) => {
        ErrnoDescription {
            code: libc::$code,
            name: stringify!($code),
            message: $message,
            help: $help,
        }
    };
}

static DESCRIPTIONS: &[ErrnoDescription] = &[
    errno!(
        EPERM,
        "Operation not permitted.",
        "Only the owner of the file or resource, or a process with special privileges, can perform the operation."
    ),
    errno!(
        ENOENT,
        "No such file or directory.",
        "A file or shared memory object was referenced in a context where it is expected to already exist, but it does not."
    ),
    errno!(ESRCH, "No such process.", "No process matches the specified process ID."),
    errno!(
        EINTR,
        "Interrupted system call.",
        "An asynchronous signal occurred and prevented completion of the call. The call can usually be retried."
    ),
    errno!(EIO, "Input/output error.", "Usually used for physical read or write errors."),
    errno!(
        ENXIO,
        "No such device or address.",
        "The system tried to use the device represented by a file, and could not find it."
    ),
    errno!(
        E2BIG,
        "Argument list too long.",
        "The arguments passed to a new program occupy too much memory."
    ),
    errno!(ENOEXEC, "Exec format error.", "Invalid executable file format."),
    errno!(
        EBADF,
        "Bad file descriptor.",
        "The descriptor is not open, or was opened without the access mode the operation needs (for example writing to a descriptor opened read-only)."
    ),
    errno!(ECHILD, "No child processes.", "There are no child processes to manipulate."),
    errno!(
        EDEADLK,
        "Resource deadlock avoided.",
        "Allocating a system resource would have resulted in a deadlock."
    ),
    errno!(
        ENOMEM,
        "Cannot allocate memory.",
        "The system cannot allocate more virtual memory because its capacity is full. For mlock and mlockall this also means the RLIMIT_MEMLOCK soft limit would be exceeded; the limit is not enforced for processes holding CAP_IPC_LOCK."
    ),
    errno!(
        EACCES,
        "Permission denied.",
        "The permissions of the object do not allow the attempted operation."
    ),
    errno!(EFAULT, "Bad address.", "An invalid pointer or an empty name was passed to the call."),
    errno!(
        ENOTBLK,
        "Block device required.",
        "A file that is not a block special file was given where one is required."
    ),
    errno!(
        EBUSY,
        "Device or resource busy.",
        "A system resource that cannot be shared is already in use."
    ),
    errno!(
        EEXIST,
        "File exists.",
        "An existing file or shared memory object was specified in a context where only a new one makes sense."
    ),
    errno!(
        EXDEV,
        "Invalid cross-device link.",
        "An attempt to make an improper link across file systems was detected."
    ),
    errno!(
        ENODEV,
        "No such device.",
        "The wrong type of device was given to a function that expects a particular sort of device. mmap reports it when the underlying file system does not support memory mapping."
    ),
    errno!(
        ENOTDIR,
        "Not a directory.",
        "A file that is not a directory was specified where a directory is required."
    ),
    errno!(EISDIR, "Is a directory.", "You cannot open a directory for writing."),
    errno!(
        EINVAL,
        "Invalid argument.",
        "A wrong argument was passed to a library function: a zero length, unsupported flag bits, a name of invalid length, or a memory range that does not match a live mapping."
    ),
    errno!(
        ENFILE,
        "Too many open files in system.",
        "There are too many distinct file openings in the entire system."
    ),
    errno!(
        EMFILE,
        "Too many open files.",
        "The current process has too many files open and cannot open any more. The limit is controlled by RLIMIT_NOFILE."
    ),
    errno!(
        ENOTTY,
        "Inappropriate ioctl for device.",
        "Inappropriate I/O control operation, such as trying to set terminal modes on an ordinary file."
    ),
    errno!(
        ETXTBSY,
        "Text file busy.",
        "An attempt to execute a file that is open for writing, or to write to a file that is being executed."
    ),
    errno!(
        EFBIG,
        "File too large.",
        "The size of a file would be larger than allowed by the system."
    ),
    errno!(
        ENOSPC,
        "No space left on device.",
        "A write or truncate failed because the device is full."
    ),
    errno!(ESPIPE, "Illegal seek.", "Invalid seek operation, such as on a pipe."),
    errno!(
        EROFS,
        "Read-only file system.",
        "An attempt was made to modify something on a read-only file system."
    ),
    errno!(EMLINK, "Too many links.", "The link count of a single file would become too large."),
    errno!(
        EPIPE,
        "Broken pipe.",
        "There is no process reading from the other end of a pipe."
    ),
    errno!(
        EDOM,
        "Numerical argument out of domain.",
        "An argument does not fall into the domain over which the function is defined."
    ),
    errno!(
        ERANGE,
        "Numerical result out of range.",
        "The result value is not representable because of overflow or underflow."
    ),
    errno!(
        EAGAIN,
        "Resource temporarily unavailable.",
        "The call might work if you try again later. For mmap and mlock it means too much memory has been locked."
    ),
    errno!(
        EWOULDBLOCK,
        "Operation would block.",
        "Another name for EAGAIN on most systems."
    ),
    errno!(
        EINPROGRESS,
        "Operation now in progress.",
        "An operation that cannot complete immediately was initiated on a non-blocking object."
    ),
    errno!(
        EALREADY,
        "Operation already in progress.",
        "An operation is already in progress on a non-blocking object."
    ),
    errno!(
        ENOTSOCK,
        "Socket operation on non-socket.",
        "A file that is not a socket was specified when a socket is required."
    ),
    errno!(
        EMSGSIZE,
        "Message too long.",
        "The size of a message sent on a socket was larger than the supported maximum size."
    ),
    errno!(
        EPROTOTYPE,
        "Protocol wrong type for socket.",
        "The socket type does not support the requested communications protocol."
    ),
    errno!(
        ENOPROTOOPT,
        "Protocol not available.",
        "A socket option was specified that does not make sense for the protocol used by the socket."
    ),
    errno!(
        EPROTONOSUPPORT,
        "Protocol not supported.",
        "The socket domain does not support the requested communications protocol."
    ),
    errno!(ESOCKTNOSUPPORT, "Socket type not supported.", "The socket type is not supported."),
    errno!(
        EPFNOSUPPORT,
        "Protocol family not supported.",
        "The socket communications protocol family requested is not supported."
    ),
    errno!(
        EAFNOSUPPORT,
        "Address family not supported by protocol.",
        "The address family specified for a socket is inconsistent with the protocol used on the socket."
    ),
    errno!(
        EADDRINUSE,
        "Address already in use.",
        "The requested socket address is already in use."
    ),
    errno!(
        EADDRNOTAVAIL,
        "Cannot assign requested address.",
        "The requested socket address is not available on this host."
    ),
    errno!(ENETDOWN, "Network is down.", "A socket operation failed because the network was down."),
    errno!(
        ENETUNREACH,
        "Network is unreachable.",
        "A socket operation failed because the subnet containing the remote host was unreachable."
    ),
    errno!(
        ENETRESET,
        "Network dropped connection on reset.",
        "A network connection was reset because the remote host crashed."
    ),
    errno!(
        ECONNABORTED,
        "Software caused connection abort.",
        "A network connection was aborted locally."
    ),
    errno!(
        ECONNRESET,
        "Connection reset by peer.",
        "A network connection was closed for reasons outside the control of the local host, such as the remote machine rebooting."
    ),
    errno!(
        ENOBUFS,
        "No buffer space available.",
        "The kernel's buffers for I/O operations are all in use."
    ),
    errno!(
        EISCONN,
        "Transport endpoint is already connected.",
        "An attempt was made to connect a socket that is already connected."
    ),
    errno!(
        ENOTCONN,
        "Transport endpoint is not connected.",
        "Data was transmitted over a socket that is not connected to anything."
    ),
    errno!(
        EDESTADDRREQ,
        "Destination address required.",
        "No default destination address was set for a connectionless socket."
    ),
    errno!(
        ESHUTDOWN,
        "Cannot send after transport endpoint shutdown.",
        "The socket has already been shut down."
    ),
    errno!(ETOOMANYREFS, "Too many references: cannot splice.", ""),
    errno!(
        ETIMEDOUT,
        "Connection timed out.",
        "A socket operation with a specified timeout received no response during the timeout period."
    ),
    errno!(
        ECONNREFUSED,
        "Connection refused.",
        "A remote host refused the network connection, typically because it is not running the requested service."
    ),
    errno!(
        ELOOP,
        "Too many levels of symbolic links.",
        "Too many symbolic links were encountered while resolving a path, or the final component is a symbolic link and O_NOFOLLOW was given."
    ),
    errno!(
        ENAMETOOLONG,
        "File name too long.",
        "A path or shared memory object name is longer than the system permits."
    ),
    errno!(
        EHOSTDOWN,
        "Host is down.",
        "The remote host for a requested network connection is down."
    ),
    errno!(
        EHOSTUNREACH,
        "No route to host.",
        "The remote host for a requested network connection is not reachable."
    ),
    errno!(ENOTEMPTY, "Directory not empty.", "An empty directory was expected."),
    errno!(
        EUSERS,
        "Too many users.",
        "The file quota system is confused because there are too many users."
    ),
    errno!(EDQUOT, "Disk quota exceeded.", "The user's disk quota was exceeded."),
    errno!(
        ESTALE,
        "Stale file handle.",
        "An internal confusion in the file system, usually caused by rearrangements on an NFS server."
    ),
    errno!(
        EREMOTE,
        "Object is remote.",
        "An attempt was made to mount a remote file system with a name that already refers to a remote file."
    ),
    errno!(
        ENOLCK,
        "No locks available.",
        "The file locking facilities ran out of locks."
    ),
    errno!(
        ENOSYS,
        "Function not implemented.",
        "The function is not implemented by the C library or the operating system, and will always fail with ENOSYS on this system."
    ),
    errno!(
        ENOTSUP,
        "Not supported.",
        "The parameter values are valid, but the functionality they request is not available for this object."
    ),
    errno!(
        EOPNOTSUPP,
        "Operation not supported.",
        "The operation is not supported for this kind of object."
    ),
    errno!(EBADMSG, "Bad message.", ""),
    errno!(EIDRM, "Identifier removed.", ""),
    errno!(EMULTIHOP, "Multihop attempted.", ""),
    errno!(ENOLINK, "Link has been severed.", ""),
    errno!(ENOMSG, "No message of desired type.", ""),
    errno!(EOVERFLOW, "Value too large for defined data type.", ""),
    errno!(EPROTO, "Protocol error.", ""),
    errno!(
        EILSEQ,
        "Invalid or incomplete multibyte or wide character.",
        "An invalid or incomplete byte sequence was found while decoding a multibyte character."
    ),
    errno!(
        ECANCELED,
        "Operation canceled.",
        "An asynchronous operation was canceled before it completed."
    ),
    errno!(EOWNERDEAD, "Owner died.", ""),
    errno!(ENOTRECOVERABLE, "State not recoverable.", ""),
];

#[cfg(any(target_os = "linux", target_os = "android", target_vendor = "apple"))]
static STREAMS_DESCRIPTIONS: &[ErrnoDescription] = &[
    errno!(ENODATA, "No data available.", ""),
    errno!(ENOSR, "Out of streams resources.", ""),
    errno!(ENOSTR, "Device not a stream.", ""),
    errno!(ETIME, "Timer expired.", ""),
];

#[cfg(not(any(target_os = "linux", target_os = "android", target_vendor = "apple")))]
static STREAMS_DESCRIPTIONS: &[ErrnoDescription] = &[];
