pub mod d405_organization_stats;
