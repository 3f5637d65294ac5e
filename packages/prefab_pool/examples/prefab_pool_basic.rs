//! Spawns and despawns projectiles over a few simulated frames, showing how released
//! instances are reused instead of constructed again.

use nm::Report;
use prefab_pool::{PoolRegistry, Poolable, PrefabId, ReleaseTo, ResetOutcome};

#[derive(Clone, Debug)]
struct Projectile {
    prefab_id: Option<PrefabId>,
    visible: bool,
    position: (i32, i32),
    ticks_alive: u32,
}

impl Poolable for Projectile {
    fn prefab_id(&self) -> Option<PrefabId> {
        self.prefab_id
    }

    fn set_prefab_id(&mut self, prefab_id: PrefabId) {
        self.prefab_id = Some(prefab_id);
    }

    fn reset(&mut self) -> ResetOutcome {
        self.visible = false;
        self.position = (0, 0);
        self.ticks_alive = 0;
        ResetOutcome::Recycle
    }

    fn restart(&mut self) {
        self.visible = true;
    }
}

const FRAMES: u32 = 6;
const LIFETIME_TICKS: u32 = 2;

fn main() {
    let mut registry = PoolRegistry::new();

    let arrow = registry
        .prefab(Projectile {
            prefab_id: None,
            visible: false,
            position: (0, 0),
            ticks_alive: 0,
        })
        .name("arrow")
        .build();

    println!("Registered prefab '{}' as {}", arrow.name(), arrow.id());

    let mut live = Vec::new();

    for frame in 0..FRAMES {
        // Spawn one projectile per frame.
        let mut projectile = arrow.acquire_from(&mut registry);
        projectile.restart();
        projectile.position = (0, 10);
        live.push(projectile);

        // Advance everything that is alive.
        for projectile in &mut live {
            projectile.ticks_alive = projectile.ticks_alive.saturating_add(1);
            projectile.position.0 = projectile.position.0.saturating_add(5);
        }

        // Despawn the ones that have lived long enough.
        let (expired, still_alive): (Vec<_>, Vec<_>) = live
            .into_iter()
            .partition(|projectile| projectile.ticks_alive >= LIFETIME_TICKS);
        live = still_alive;

        for projectile in expired {
            projectile.release_to(&mut registry);
        }

        println!(
            "Frame {frame}: {} alive, {} idle in pool",
            live.len(),
            registry.idle_count(arrow.id())
        );
    }

    println!();
    println!("{}", Report::collect());
}
