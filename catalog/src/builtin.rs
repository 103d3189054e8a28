//! The built-in kubectl alias catalog.

use shell_aliases_core::{Catalog, Segment, SegmentGroup};

const READ_OPS: [&str; 3] = ["g", "des", "del"];

/// Returns the default kubectl catalog.
///
/// Groups, in order: base command, operations, resources, flags (any
/// subset, any order) and value-taking positional args (at most one, last).
///
/// # Examples
///
/// ```
/// use shell_aliases_catalog::kubectl_catalog;
///
/// let catalog = kubectl_catalog();
/// let names: Vec<&str> = catalog.groups.iter().map(|g| g.name.as_str()).collect();
/// assert_eq!(names, vec!["cmds", "ops", "res", "args", "positional_args"]);
/// ```
pub fn kubectl_catalog() -> Catalog {
    let cmds = SegmentGroup::mandatory_one("cmds", vec![Segment::new("k", "kubectl")]);

    let ops = SegmentGroup::optional_one(
        "ops",
        vec![
            Segment::new("a", "apply --recursive -f"),
            Segment::new("ak", "apply -k"),
            Segment::new("ex", "exec -i -t"),
            Segment::new("lo", "logs"),
            Segment::new("p", "proxy"),
            Segment::new("pf", "port-forward"),
            Segment::new("g", "get"),
            Segment::new("des", "describe"),
            Segment::new("del", "delete --wait=false"),
            Segment::new("c", "config"),
        ],
    );

    let res = SegmentGroup::optional_one(
        "res",
        vec![
            Segment::new("po", "pods").requires(READ_OPS),
            Segment::new("dep", "deployment").requires(READ_OPS),
            Segment::new("svc", "service").requires(READ_OPS),
            Segment::new("ing", "ingress").requires(READ_OPS),
            Segment::new("cm", "configmap").requires(READ_OPS),
            Segment::new("sec", "secret").requires(READ_OPS),
            Segment::new("q", "quota").requires(["g", "des"]),
            Segment::new("np", "networkpolicy").requires(["g", "des"]),
            Segment::new("hr", "helmrelease").requires(READ_OPS),
            Segment::new("cc", "current-context").requires(["c"]),
            Segment::new("uc", "use-context").requires(["c"]),
            Segment::new("v", "view").requires(["c"]),
        ],
    );

    // --show-labels only makes sense for pods and deployments.
    let label_excluded = res.codes_except(&["po", "dep"]);

    let args = SegmentGroup::optional_any(
        "args",
        vec![
            Segment::new("oy", "-o=yaml")
                .requires(["g"])
                .incompatible(["ow", "sl"]),
            Segment::new("ow", "-o=wide")
                .requires(["g"])
                .incompatible(["oy"]),
            Segment::new("sl", "--show-labels")
                .requires(["g"])
                .incompatible(["oy"])
                .incompatible(label_excluded),
            Segment::new("w", "--watch")
                .requires(["g"])
                .incompatible(["oy", "ow"]),
            Segment::new("w", "--wait=true").requires(["del"]),
            Segment::new("f", "--force --grace-period=0").requires(["del"]),
            Segment::new("f", "-f").requires(["lo"]),
            Segment::new("t", "--tail=100").requires(["lo"]),
            Segment::new("p", "-p").requires(["lo"]),
        ],
    );

    // These take a value, so they go last and exclude each other.
    let positional_args = SegmentGroup::optional_one(
        "positional_args",
        vec![
            Segment::new("l", "-l").requires(READ_OPS),
            Segment::new("g", "| grep").requires(["g", "des"]),
        ],
    );

    Catalog::new(vec![cmds, ops, res, args, positional_args])
}
