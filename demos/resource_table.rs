// Minimal resource table: textures owned by a slot pool, addressed through
// stable keys and observed through non-owning item references.

use slotpool::{ItemRef, SlotPool};

#[derive(Debug)]
struct Texture {
    name: &'static str,
    width: u32,
    height: u32,
}

fn main() {
    let mut textures = SlotPool::with_capacity(16);

    let grass = textures.insert(Texture {
        name: "grass",
        width: 128,
        height: 128,
    });
    let stone = textures.insert(Texture {
        name: "stone",
        width: 256,
        height: 256,
    });
    let water = textures.insert(Texture {
        name: "water",
        width: 64,
        height: 64,
    });

    println!("{} textures loaded", textures.len());
    for (key, texture) in &textures {
        println!(
            "  {:?} -> {} ({}x{})",
            key, texture.name, texture.width, texture.height
        );
    }

    // Unloading through one key leaves every other key untouched.
    textures.remove(stone);
    println!("after unload: {} textures, water is {:?}", textures.len(), textures[water].name);

    // Observers revalidate on every access instead of caching a reference,
    // so a stale key is reported rather than resolving to garbage.
    let grass_ref = ItemRef::new(Some(&textures), grass);
    let stone_ref = ItemRef::new(Some(&textures), stone);
    match grass_ref.get() {
        Ok(texture) => println!("grass is {}x{}", texture.width, texture.height),
        Err(err) => println!("grass unavailable: {}", err),
    }
    match stone_ref.get() {
        Ok(texture) => println!("stone is {}x{}", texture.width, texture.height),
        Err(err) => println!("stone unavailable: {}", err),
    }

    // Live values stay packed: positions iterate densely and map back to
    // the key that owns them.
    for pos in 0..textures.len() {
        let key = textures.key_at(pos).unwrap();
        println!("position {} holds {:?} ({})", pos, key, textures[pos].name);
    }
}
