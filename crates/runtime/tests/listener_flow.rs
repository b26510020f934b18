use std::sync::Arc;
use std::time::Duration;

use armorset_core::{
    ArmorContents, ArmorSlot, AttributeDescriptor, SetDefinition, SetRegistry, WornItem,
};
use armorset_runtime::{
    AttributeCompiler, AttributeRequest, DEFAULT_REFRESH_DELAY, EntityKind, EquipmentHost,
    EquipmentListener, HostEvent, InMemoryEquipment, InventoryKind, PlayerId, SetService,
};

/// Compiles `"Stat: value"` descriptors into `(stat, value)` pairs.
struct StatCompiler;

impl AttributeCompiler for StatCompiler {
    type Effect = (String, String);

    fn compile(&self, descriptors: &[AttributeDescriptor]) -> Vec<(String, String)> {
        descriptors
            .iter()
            .filter_map(|d| d.as_str().split_once(':'))
            .map(|(stat, value)| (stat.trim().to_owned(), value.trim().to_owned()))
            .collect()
    }
}

const PLAYER: PlayerId = PlayerId(7);

fn listener() -> EquipmentListener<InMemoryEquipment, StatCompiler> {
    let mut registry = SetRegistry::new();
    registry
        .insert(
            SetDefinition::builder("dragon")
                .name("&6Dragon Set")
                .piece("helmet", "Dragon Helm")
                .piece("chestplate", "Dragon Plate")
                .piece("leggings", "Dragon Greaves")
                .piece("boots", "Dragon Boots")
                .threshold(2, ["Health: +40"])
                .threshold(4, ["Damage: +15%"])
                .build()
                .expect("valid definition"),
        )
        .expect("unique name");

    let service = SetService::builder()
        .host(InMemoryEquipment::new())
        .compiler(StatCompiler)
        .registry(registry)
        .build()
        .expect("service should build");

    let piece = WornItem::with_lore(["§6Dragon Set"]);
    service.host().join(
        PLAYER,
        ArmorContents::empty()
            .with(ArmorSlot::Helmet, piece.clone())
            .with(ArmorSlot::Chestplate, piece),
    );

    EquipmentListener::new(Arc::new(service), DEFAULT_REFRESH_DELAY)
}

async fn next_tick() {
    tokio::time::sleep(DEFAULT_REFRESH_DELAY + Duration::from_millis(1)).await;
    tokio::task::yield_now().await;
}

fn helmet_lore(listener: &EquipmentListener<InMemoryEquipment, StatCompiler>) -> String {
    let armor = listener
        .service()
        .host()
        .armor_contents(PLAYER)
        .expect("player online");
    armor.get(ArmorSlot::Helmet).expect("helmet").lore[0].clone()
}

/// Joining schedules a deferred refresh that updates lore one tick later.
#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_join_refreshes_lore_after_a_tick() {
    let listener = listener();

    assert!(listener.handle(HostEvent::PlayerJoin { player: PLAYER }));
    assert_eq!(helmet_lore(&listener), "§6Dragon Set");

    next_tick().await;
    assert_eq!(helmet_lore(&listener), "§6Dragon Set (2/4)");
    assert_eq!(listener.scheduler().pending(), 0);
}

/// A burst of equipment events collapses into one write-back.
#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_event_burst_coalesces() {
    let listener = listener();

    assert!(listener.handle(HostEvent::ItemHeld { player: PLAYER }));
    assert!(!listener.handle(HostEvent::InventoryClick {
        player: PLAYER,
        inventory: InventoryKind::Player,
        raw_slot: 39,
        cancelled: false,
    }));
    assert!(!listener.handle(HostEvent::ItemHeld { player: PLAYER }));

    next_tick().await;
    assert_eq!(listener.service().host().write_backs(), 1);
}

/// Clicks outside the armor slots, in foreign inventories or cancelled by
/// another plugin are ignored.
#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_irrelevant_clicks_are_ignored() {
    let listener = listener();
    let clicks = [
        (InventoryKind::Player, 12, false),
        (InventoryKind::Other, 38, false),
        (InventoryKind::Crafting, 38, true),
    ];

    for (inventory, raw_slot, cancelled) in clicks {
        assert!(!listener.handle(HostEvent::InventoryClick {
            player: PLAYER,
            inventory,
            raw_slot,
            cancelled,
        }));
    }
    assert_eq!(listener.scheduler().pending(), 0);
}

/// Quitting cancels the pending refresh.
#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_quit_cancels_pending_refresh() {
    let listener = listener();
    listener.handle(HostEvent::PlayerJoin { player: PLAYER });
    listener.handle(HostEvent::PlayerQuit { player: PLAYER });

    next_tick().await;
    assert_eq!(listener.service().host().write_backs(), 0);
}

/// Attribute requests for players append compiled effects.
#[tokio::test]
async fn test_attribute_request_appends_effects() {
    let listener = listener();
    let mut effects = vec![("Armor".to_owned(), "+1".to_owned())];

    let appended = listener.on_attribute_request(AttributeRequest::player(PLAYER, &mut effects));

    assert_eq!(appended, 1);
    assert_eq!(
        effects,
        vec![
            ("Armor".to_owned(), "+1".to_owned()),
            ("Health".to_owned(), "+40".to_owned()),
        ]
    );
    assert_eq!(helmet_lore(&listener), "§6Dragon Set (2/4)");
}

/// Non-player entities and requests without a container are ignored.
#[tokio::test]
async fn test_attribute_request_ignores_other_entities() {
    let listener = listener();
    let mut effects = Vec::new();

    let other = AttributeRequest {
        entity: EntityKind::Other,
        effects: Some(&mut effects),
    };
    assert_eq!(listener.on_attribute_request(other), 0);

    let without_container = AttributeRequest {
        entity: EntityKind::Player(PLAYER),
        effects: None,
    };
    assert_eq!(listener.on_attribute_request(without_container), 0);

    assert!(effects.is_empty());
    assert_eq!(listener.service().host().write_backs(), 0);
}
