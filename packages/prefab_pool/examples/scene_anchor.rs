//! Shows how a host groups idle instances under containers of its own scene graph.

use std::cell::RefCell;
use std::rc::Rc;

use prefab_pool::{ContainerId, DefaultPoolable, PoolRegistry, SceneAnchor};

/// Minimal scene graph: a list of named nodes with optional parents.
#[derive(Debug, Default)]
struct SceneGraph {
    nodes: Vec<(String, Option<ContainerId>)>,
}

impl SceneGraph {
    fn print(&self) {
        for (index, (name, parent)) in self.nodes.iter().enumerate() {
            match parent {
                Some(parent) => println!("  node {index}: '{name}' under node {}", parent.get()),
                None => println!("  node {index}: '{name}' at the root"),
            }
        }
    }
}

/// Hands out containers from a scene graph that the host keeps access to.
#[derive(Debug)]
struct SharedScene(Rc<RefCell<SceneGraph>>);

impl SceneAnchor for SharedScene {
    fn create_container(&mut self, name: &str, parent: Option<ContainerId>) -> ContainerId {
        let mut scene = self.0.borrow_mut();
        let id = ContainerId::new(scene.nodes.len() as u64);
        scene.nodes.push((name.to_string(), parent));
        id
    }
}

fn main() {
    let scene = Rc::new(RefCell::new(SceneGraph::default()));

    let mut registry = PoolRegistry::builder()
        .scene_anchor(SharedScene(Rc::clone(&scene)))
        .build();

    let crate_prefab = registry
        .prefab(DefaultPoolable::new("wooden crate"))
        .name("crate")
        .build();
    let barrel_prefab = registry
        .prefab(DefaultPoolable::new("barrel"))
        .name("barrel")
        .build();

    let crate_instance = registry.acquire(&crate_prefab);
    let barrel_instance = registry.acquire(&barrel_prefab);

    registry.release(crate_instance);
    registry.release(barrel_instance);

    let parked = registry.acquire(&crate_prefab);
    println!(
        "Reused '{}' was parked under container {:?}",
        *parked,
        parked.container().map(ContainerId::get)
    );

    println!("Scene graph:");
    scene.borrow().print();
}
