use std::fmt::{Display, Write};

use crate::{arena::NodeRef, AvlTree};

impl<K> AvlTree<K>
where
    K: Display,
{
    /// Render the structure of the tree as a Graphviz `digraph`, labelling
    /// each node with its key and height.
    ///
    /// Nodes are named by their [`NodeRef`], so trees holding duplicate keys
    /// render correctly.
    pub fn to_dot(&self) -> String {
        let mut buf = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(buf, "digraph {{");
        if let Some(root) = self.root {
            let _ = self.recurse(root, &mut buf);
        }
        let _ = writeln!(buf, "}}");

        buf
    }

    fn recurse<W>(&self, n: NodeRef, buf: &mut W) -> std::fmt::Result
    where
        W: Write,
    {
        let node = &self.nodes[n];
        writeln!(buf, r#""{n}" [label="{} | h={}"];"#, node.key, node.height)?;

        for v in [node.left, node.right] {
            match v {
                Some(v) => {
                    writeln!(buf, r#""{n}" -> "{v}";"#)?;
                    self.recurse(v, buf)?;
                }
                None => {
                    writeln!(buf, r#""null_{n}" [shape=point,style=invis];"#)?;
                    writeln!(buf, r#""{n}" -> "null_{n}" [style=invis];"#)?;
                }
            };
        }

        Ok(())
    }
}
